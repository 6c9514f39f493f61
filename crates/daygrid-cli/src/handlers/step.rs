use anyhow::{Result, anyhow};
use daygrid_engine::step;
use daygrid_types::{Direction, MonthYear};

use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::present_step;

pub fn handle(
    renderer: &ConsoleRenderer,
    direction: Direction,
    month: u32,
    year: i32,
) -> Result<()> {
    let from = MonthYear::new(month, year)?;
    let to = step(from, direction)
        .ok_or_else(|| {
            let name = match direction {
                Direction::Prev => "previous",
                Direction::Next => "next",
            };
            anyhow!("{} has no {} month in the supported range", from, name)
        })?;

    renderer.render(&present_step(direction, from, to))
}
