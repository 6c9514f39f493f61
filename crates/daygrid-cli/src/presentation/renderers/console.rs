use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::presentation::view_models::{CreateView, TextStyle};

pub struct ConsoleRenderer {
    json_mode: bool,
    style: TextStyle,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, style: TextStyle) -> Self {
        Self { json_mode, style }
    }

    pub fn render<T>(&self, data: &T) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, data)
    }

    pub fn render_to<T, W>(&self, out: &mut W, data: &T) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(data)?)?;
            return Ok(());
        }

        write!(out, "{}", data.create_view(self.style))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_step;
    use daygrid_types::{Direction, MonthYear};

    #[test]
    fn test_plain_and_json_step() -> Result<()> {
        let vm = present_step(
            Direction::Prev,
            MonthYear::new(1, 2024)?,
            MonthYear::new(12, 2023)?,
        );

        let mut plain = Vec::new();
        ConsoleRenderer::new(false, TextStyle::Plain).render_to(&mut plain, &vm)?;
        assert_eq!(String::from_utf8(plain)?, "2023-12\n");

        let mut json = Vec::new();
        ConsoleRenderer::new(true, TextStyle::Plain).render_to(&mut json, &vm)?;
        let value: serde_json::Value = serde_json::from_slice(&json)?;
        assert_eq!(value["to"]["month"], 12);
        assert_eq!(value["direction"], "prev");
        Ok(())
    }
}
