//! When steps for task authorization BDD scenarios.

use super::world::{TaskWorld, run_async};
use rstest_bdd_macros::when;
use taskgate::task::{domain::TaskId, services::CreateTaskRequest};

#[when(r#"the actor creates a task titled "{title}""#)]
fn actor_creates_task(world: &mut TaskWorld, title: String) {
    let use_case = world.create_task();
    let result = run_async(use_case.execute(world.actor.as_ref(), CreateTaskRequest::new(title)));
    world.last_result = Some(result);
}

#[when("the actor completes task {id:i64}")]
fn actor_completes_task(world: &mut TaskWorld, id: i64) {
    let use_case = world.complete_task();
    let result = run_async(use_case.execute(world.actor.as_ref(), TaskId::new(id)));
    world.last_result = Some(result);
}
