use anyhow::{Result, bail};
use daygrid_engine::CalendarPicker;
use is_terminal::IsTerminal;

use super::resolve_month;
use crate::config::Config;
use crate::presentation::ConsoleRenderer;
use crate::presentation::renderers::PickerApp;
use crate::presentation::view_models::PickedViewModel;

pub fn handle(
    renderer: &ConsoleRenderer,
    config: &Config,
    month: Option<u32>,
    year: Option<i32>,
    adjacent: bool,
) -> Result<()> {
    if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        bail!("`pick` needs an interactive terminal; use `show --select` instead");
    }

    let target = resolve_month(month, year)?;
    let picker = CalendarPicker::new(target, config.picker_options(adjacent));

    let Some(selected_date) = PickerApp::new(picker).run()? else {
        tracing::info!("picker closed without a selection");
        return Ok(());
    };

    renderer.render(&PickedViewModel { selected_date })
}
