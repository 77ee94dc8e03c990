//! Drives animated entities in a `hecs` world
//!
//! An animated entity carries an `AnimationMachine<Entity>` whose clips point
//! at entities holding a [`Sprite`]. Usually that is the entity itself, but a
//! machine may drive sprites on other entities too.

use hecs::{Entity, World};

use crate::animation::{AnimationMachine, FrameCommand, FrameSink, Sprite};

/// Machine type stored on animated entities
pub type EntityAnimation = AnimationMachine<Entity>;

/// Spawn an entity holding `sprite` and an animation built by `build`
///
/// `build` receives the new entity so its clips can target it.
pub fn spawn_animated<F>(world: &mut World, sprite: Sprite, build: F) -> crate::core::Result<Entity>
where
    F: FnOnce(Entity) -> crate::core::Result<EntityAnimation>,
{
    let entity = world.spawn((sprite,));
    let attached = build(entity).and_then(|machine| attach_animation(world, entity, machine));
    if let Err(e) = attached {
        if world.despawn(entity).is_err() {
            log::warn!("Entity {:?} vanished before its failed spawn was undone", entity);
        }
        return Err(e);
    }
    Ok(entity)
}

/// Give an existing entity an animation machine
pub fn attach_animation(world: &mut World, entity: Entity, machine: EntityAnimation) -> crate::core::Result<()> {
    world.insert_one(entity, machine).inspect_err(|_| {
        log::warn!("Cannot attach animation to missing entity {:?}", entity);
    })?;
    Ok(())
}

/// Step every animation machine by `dt` and show the resulting frames
///
/// Returns the number of frame commands applied.
pub fn update_animations(world: &mut World, dt: f32) -> usize {
    let commands: Vec<FrameCommand<Entity>> = world
        .query_mut::<&mut EntityAnimation>()
        .into_iter()
        .filter_map(|(_, machine)| machine.update(dt))
        .collect();

    for cmd in &commands {
        world.set_frame(cmd.sprite, cmd.frame);
    }

    log::trace!("Applied {} animation frames", commands.len());
    commands.len()
}
