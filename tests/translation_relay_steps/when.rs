//! When steps for translation relay BDD scenarios.

use super::world::{RelayWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"the sender writes "{text}""#)]
fn sender_writes(world: &mut RelayWorld, text: String) -> Result<(), eyre::Report> {
    let relay = world
        .relay
        .as_ref()
        .ok_or_else(|| eyre::eyre!("relay not built in scenario world"))?;
    let sender = world
        .sender
        .clone()
        .ok_or_else(|| eyre::eyre!("no sender in scenario world"))?;

    let message = relay.accept(sender, text);
    let reply = run_async(relay.reply_to(&message));
    run_async(relay.dispatch(reply)).wrap_err("await delivery task")?;
    Ok(())
}
