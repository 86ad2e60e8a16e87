//! Given steps for translation relay BDD scenarios.

use super::world::RelayWorld;
use eyre::WrapErr;
use jembatan::language::domain::LanguageTag;
use jembatan::relay::domain::SenderId;
use rstest_bdd_macros::given;

#[given("a relay with scripted providers")]
fn relay_with_scripted_providers(world: &mut RelayWorld) {
    world.build_relay();
}

#[given(r#"a sender "{address}""#)]
fn a_sender(world: &mut RelayWorld, address: String) -> Result<(), eyre::Report> {
    world.sender = Some(SenderId::new(address).wrap_err("build sender for scenario")?);
    Ok(())
}

#[given(r#"the detector reports "{code}" for "{text}""#)]
fn detector_reports(world: &mut RelayWorld, code: String, text: String) -> Result<(), eyre::Report> {
    world
        .detector
        .script(text, code)
        .wrap_err("script detector")?;
    Ok(())
}

#[given(r#"the translator renders "{text}" into "{target}" as "{output}""#)]
fn translator_renders(
    world: &mut RelayWorld,
    text: String,
    target: String,
    output: String,
) -> Result<(), eyre::Report> {
    let language = LanguageTag::try_from(target.as_str()).wrap_err("parse target language")?;
    world
        .translator
        .script(text, language, output)
        .wrap_err("script translator")?;
    Ok(())
}

#[given("the translator is failing")]
fn translator_is_failing(world: &mut RelayWorld) -> Result<(), eyre::Report> {
    world
        .translator
        .set_failing(true)
        .wrap_err("make translator fail")?;
    Ok(())
}

#[given("delivery is failing")]
fn delivery_is_failing(world: &mut RelayWorld) -> Result<(), eyre::Report> {
    world
        .delivery
        .set_failing(true)
        .wrap_err("make delivery fail")?;
    Ok(())
}
