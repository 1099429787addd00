use affect_forces::forces::{
    acceleration_force, attraction_force, constrain_bounce, orientation_force, velocity_force,
    Attractor, Bounds, DistanceRange, MassMode,
};
use affect_forces::{ForceSet, Thing, ThingId, Vector2};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_apply(c: &mut Criterion) {
    let set = ForceSet::new()
        .with(acceleration_force(Vector2::new(0.0001, 0.0), MassMode::Ignored))
        .with(velocity_force(0.01, MassMode::Dampen))
        .with(orientation_force(0.5))
        .with(constrain_bounce(Bounds::default(), 0.8));

    c.bench_function("apply_four_forces", |b| {
        let thing = Thing::at(Vector2::new(0.5, 0.5)).with_velocity(Vector2::new(0.01, 0.02));
        b.iter(|| set.apply(black_box(thing)).unwrap())
    });
}

fn bench_attraction(c: &mut Criterion) {
    let things: Vec<Thing> = (0..64)
        .map(|i| Thing::at(Vector2::new((i % 8) as f32 / 8.0, (i / 8) as f32 / 8.0)))
        .collect();
    let attractors = Attractor::enumerate(&things);
    let force = attraction_force(attractors, Some(ThingId(0)), 0.0001, DistanceRange::default());

    c.bench_function("attraction_64_bodies", |b| {
        b.iter(|| force.apply_to(black_box(things[0])).unwrap())
    });
}

criterion_group!(benches, bench_apply, bench_attraction);
criterion_main!(benches);
