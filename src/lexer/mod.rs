mod cursor;
mod lexer_error;
mod token;

use cursor::Cursor;
pub use lexer_error::{InnerLexError, LexError};
pub use token::Token;

pub type Tokens = Vec<Token>;

/// Splits raw expression text into tokens.
///
/// Whitespace between tokens is skipped, so `"+ A B"` and `"+AB"` lex the same.
pub fn lex(input: &str) -> Result<Tokens, LexError> {
    let mut cursor = Cursor::new(input);
    let mut tokens = Tokens::new();

    loop {
        cursor.skip_whitespaces();
        let position = cursor.position();
        let Some(c) = cursor.take() else {
            break;
        };
        let token = Token::try_from(c).map_err(|err| err.set_position(position))?;
        tokens.push(token);
    }

    Ok(tokens)
}
