//! Then steps for translation relay BDD scenarios.

use super::world::RelayWorld;
use jembatan::language::domain::LanguageTag;
use jembatan::relay::domain::{HELP_MESSAGE, OutboundMessage, ReplyKind};
use jembatan::translation::domain::FALLBACK_MESSAGE;
use rstest_bdd_macros::then;

fn only_delivery(world: &RelayWorld) -> Result<OutboundMessage, eyre::Report> {
    let delivered = world
        .delivery
        .delivered()
        .map_err(|err| eyre::eyre!("read deliveries: {err}"))?;
    let [reply] = delivered.as_slice() else {
        return Err(eyre::eyre!(
            "expected exactly one delivery, found {}",
            delivered.len()
        ));
    };
    let sender = world
        .sender
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no sender in scenario world"))?;
    if reply.recipient() != sender {
        return Err(eyre::eyre!(
            "reply addressed to {}, expected {sender}",
            reply.recipient()
        ));
    }
    Ok(reply.clone())
}

#[then(r#"the sender receives "{expected}""#)]
fn sender_receives(world: &mut RelayWorld, expected: String) -> Result<(), eyre::Report> {
    let reply = only_delivery(world)?;
    if reply.body() != expected {
        return Err(eyre::eyre!("expected reply '{expected}', got '{}'", reply.body()));
    }
    if reply.kind() != ReplyKind::Translation {
        return Err(eyre::eyre!("expected a translation, got {:?}", reply.kind()));
    }
    Ok(())
}

#[then(r#"the message was translated into "{target}""#)]
fn translated_into(world: &mut RelayWorld, target: String) -> Result<(), eyre::Report> {
    let calls = world
        .translator
        .calls()
        .map_err(|err| eyre::eyre!("read translator calls: {err}"))?;
    let expected = LanguageTag::try_from(target.as_str())
        .map_err(|err| eyre::eyre!("parse target language: {err}"))?;
    match calls.as_slice() {
        [(_, actual)] if *actual == expected => Ok(()),
        other => Err(eyre::eyre!("expected one call targeting {expected}, got {other:?}")),
    }
}

#[then("the sender receives the fallback reply")]
fn sender_receives_fallback(world: &mut RelayWorld) -> Result<(), eyre::Report> {
    let reply = only_delivery(world)?;
    assert_eq!(reply.body(), FALLBACK_MESSAGE);
    assert_eq!(reply.kind(), ReplyKind::Fallback);
    Ok(())
}

#[then("the sender receives the help text")]
fn sender_receives_help(world: &mut RelayWorld) -> Result<(), eyre::Report> {
    let reply = only_delivery(world)?;
    assert_eq!(reply.body(), HELP_MESSAGE);
    assert_eq!(reply.kind(), ReplyKind::Help);
    Ok(())
}

#[then("no provider was called")]
fn no_provider_called(world: &mut RelayWorld) -> Result<(), eyre::Report> {
    let detections = world
        .detector
        .calls()
        .map_err(|err| eyre::eyre!("read detector calls: {err}"))?;
    let translations = world
        .translator
        .calls()
        .map_err(|err| eyre::eyre!("read translator calls: {err}"))?;
    assert!(detections.is_empty(), "detector was called: {detections:?}");
    assert!(translations.is_empty(), "translator was called: {translations:?}");
    Ok(())
}

#[then("no reply was delivered after one attempt")]
fn no_reply_delivered(world: &mut RelayWorld) -> Result<(), eyre::Report> {
    let attempts = world
        .delivery
        .attempts()
        .map_err(|err| eyre::eyre!("read attempts: {err}"))?;
    let delivered = world
        .delivery
        .delivered()
        .map_err(|err| eyre::eyre!("read deliveries: {err}"))?;
    assert_eq!(attempts, 1);
    assert!(delivered.is_empty());
    Ok(())
}
