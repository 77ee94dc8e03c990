use criterion::{criterion_group, criterion_main, Criterion, black_box};

use wonderlift::animation::{AnimationMachine, Sprite, SpriteBank};
use wonderlift::entity::{EntityAnimation, spawn_animated, update_animations};

const DT: f32 = 1.0 / 60.0;

fn create_linked_machine(bank: &mut SpriteBank, states: usize) -> AnimationMachine {
    let sprite = bank.add(64);
    let mut machine = AnimationMachine::new(states).unwrap();
    for state in 0..states {
        let start = (state as u32 * 4) % 60;
        machine.add(state, Some(sprite), start, start + 3, DT * 4.0, false).unwrap();
    }
    machine.link_all();
    machine.set_state(0).unwrap();
    machine
}

fn bench_machine_update(c: &mut Criterion) {
    let mut bank = SpriteBank::new();
    let mut machine = create_linked_machine(&mut bank, 8);

    c.bench_function("machine_update_linked_8", |b| {
        b.iter(|| {
            machine.update_with(black_box(DT), &mut bank);
        });
    });
}

fn bench_world_update(c: &mut Criterion) {
    let mut world = hecs::World::new();
    for _ in 0..1000 {
        spawn_animated(&mut world, Sprite::new(16), |me| {
            let mut machine = EntityAnimation::new(2)?;
            machine.add(0, Some(me), 0, 7, DT * 3.0, true)?;
            machine.add(1, Some(me), 8, 15, DT * 2.0, false)?;
            machine.link(1, 0)?;
            machine.set_state(0)?;
            Ok(machine)
        })
        .unwrap();
    }

    c.bench_function("world_update_1000_entities", |b| {
        b.iter(|| update_animations(&mut world, black_box(DT)));
    });
}

criterion_group!(benches, bench_machine_update, bench_world_update);
criterion_main!(benches);
