use crate::error::{CellError, Result};

const RELEASED: &str = "Released";
const TOKEN_SEPARATOR: &str = ", ";

/// Years pulled out of a free-form launch field such as
/// `2020, Announced, 2020 Released, 2021`.
///
/// Each half of the field (split on the first `Released`) contributes its
/// second `", "`-separated token, trimmed. Text after a second `Released`
/// is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchYears {
    pub announced: Option<String>,
    pub released: Option<String>,
}

impl LaunchYears {
    /// Parse the launch field of the cell at `index`.
    ///
    /// A field without `Released` only yields an announced year (when it has
    /// one). A field with `Released` must have two tokens on both sides,
    /// otherwise [CellError::MalformedLaunch] is returned.
    pub fn parse(index: usize, text: &str) -> Result<Self> {
        let (announced_half, released_half) = match text.find(RELEASED) {
            Some(at) => {
                let rest = &text[at + RELEASED.len()..];
                (&text[..at], rest.split(RELEASED).next().unwrap_or(rest))
            }
            None => {
                return Ok(LaunchYears {
                    announced: second_token(text),
                    released: None,
                })
            }
        };

        let malformed = || CellError::MalformedLaunch {
            index,
            value: text.to_string(),
        };
        let announced = second_token(announced_half).ok_or_else(malformed)?;
        let released = second_token(released_half).ok_or_else(malformed)?;

        Ok(LaunchYears {
            announced: Some(announced),
            released: Some(released),
        })
    }

    /// `true` only when both years are known and differ.
    pub fn years_differ(&self) -> bool {
        match (&self.announced, &self.released) {
            (Some(announced), Some(released)) => announced != released,
            _ => false,
        }
    }
}

fn second_token(half: &str) -> Option<String> {
    half.trim()
        .split(TOKEN_SEPARATOR)
        .nth(1)
        .map(|token| token.trim().to_string())
}
