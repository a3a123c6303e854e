//! Interactive menu: one entry per monster, then Random, then Quit

use loot_core::MonsterType;
use tables_core::MonsterRegistry;
use thiserror::Error;

/// Longest number accepted for either input, which caps a batch at 99,999
pub const MAX_OPTION_DIGITS: usize = 5;

/// What the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `monster: None` slays random monsters
    Slay {
        monster: Option<MonsterType>,
        count: u32,
    },
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected <selection> [count]")]
    WrongTokenCount,
    #[error("'{0}' is not a number of at most {} digits", MAX_OPTION_DIGITS)]
    NotANumber(String),
    #[error("selection {selection} is outside 1-{max}")]
    SelectionOutOfRange { selection: u32, max: u32 },
}

#[derive(Debug, Clone)]
pub struct Menu {
    monsters: Vec<(MonsterType, String)>,
}

impl Menu {
    pub fn new(registry: &MonsterRegistry) -> Self {
        Menu {
            monsters: registry
                .monsters()
                .map(|m| (m.kind, m.name.clone()))
                .collect(),
        }
    }

    fn random_option(&self) -> u32 {
        self.monsters.len() as u32 + 1
    }

    fn quit_option(&self) -> u32 {
        self.monsters.len() as u32 + 2
    }

    /// Prompt listing every option
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("Select enemy to slay and collect loot!\n");
        out.push_str(
            "If you'd like to slay multiple, specify how many and a loot \
             distribution table will show when we're done with all the carnage.\n\n",
        );

        for (i, (_, name)) in self.monsters.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, name));
        }
        out.push_str(&format!("{}. Random\n", self.random_option()));
        out.push_str(&format!("{}. Quit\n", self.quit_option()));
        out
    }

    /// Parse `<selection> [count]`; count defaults to one kill
    pub fn parse(&self, input: &str) -> Result<MenuChoice, InputError> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        if tokens.is_empty() || tokens.len() > 2 {
            return Err(InputError::WrongTokenCount);
        }

        let selection = parse_number(tokens[0])?;
        let count = match tokens.get(1) {
            Some(token) => parse_number(token)?,
            None => 1,
        };

        let max = self.quit_option();
        if selection == 0 || selection > max {
            return Err(InputError::SelectionOutOfRange { selection, max });
        }

        if selection == max {
            return Ok(MenuChoice::Quit);
        }
        let monster = self
            .monsters
            .get(selection as usize - 1)
            .map(|(kind, _)| *kind);
        Ok(MenuChoice::Slay { monster, count })
    }
}

fn parse_number(token: &str) -> Result<u32, InputError> {
    if token.is_empty()
        || token.len() > MAX_OPTION_DIGITS
        || !token.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(InputError::NotANumber(token.to_string()));
    }
    token
        .parse()
        .map_err(|_| InputError::NotANumber(token.to_string()))
}
