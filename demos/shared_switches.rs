//! Shared Switches
//!
//! Two controlled switches share one boolean owned by the application. A
//! click on either one flips both, until the click counter passes its limit
//! and further toggles are ignored. The reset button clears everything.
//!
//! Run with: cargo run --example shared_switches
//! Set RUST_LOG=toggle_props=debug to see controller logs.

use toggle_props::demo::{SharedSwitch, SharedSwitchesDemo};
use toggle_props::ToggleError;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ToggleError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Shared Switches Example ===\n");

    let mut demo = SharedSwitchesDemo::new();
    println!("start    {}", demo.render());

    let script = [
        SharedSwitch::First,
        SharedSwitch::Second,
        SharedSwitch::First,
        SharedSwitch::Second,
        SharedSwitch::First,
        SharedSwitch::Second,
    ];

    for (n, switch) in script.into_iter().enumerate() {
        let frame = demo.click(switch)?;
        println!("click {} {}", n + 1, frame);
    }

    println!("uncon.   {}", demo.click_uncontrolled()?);
    println!("reset    {}", demo.click_reset());

    println!("\n=== Example Complete ===");
    Ok(())
}
