use common::config::Validate;
use serde::{Deserialize, Serialize};

pub const EMPTY_CELL_SYMBOL: char = '.';

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ConsoleConfig {
    pub x_symbol: char,
    pub o_symbol: char,
    pub show_help_on_start: bool,
}

impl Validate for ConsoleConfig {
    fn validate(&self) -> Result<(), String> {
        for symbol in [self.x_symbol, self.o_symbol] {
            if symbol.is_whitespace() || symbol.is_control() {
                return Err("player symbols must be visible characters".to_string());
            }
            if symbol == EMPTY_CELL_SYMBOL {
                return Err(format!(
                    "'{}' is reserved for empty cells",
                    EMPTY_CELL_SYMBOL
                ));
            }
        }
        if self.x_symbol == self.o_symbol {
            return Err("x_symbol and o_symbol must differ".to_string());
        }
        Ok(())
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            x_symbol: 'X',
            o_symbol: 'O',
            show_help_on_start: true,
        }
    }
}
