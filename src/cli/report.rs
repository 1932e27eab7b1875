use std::io::IsTerminal;

use transform_d::error::Error;

/// Check if colored output should be used
pub fn should_use_color(no_color: bool) -> bool {
    // Respect NO_COLOR environment variable
    if no_color || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    std::io::stderr().is_terminal()
}

/// `error:` header plus an optional `hint:` line.
pub fn render(err: &Error, use_color: bool) -> String {
    let mut out = if use_color {
        format!("\x1b[1;31merror:\x1b[0m {}", err)
    } else {
        format!("error: {}", err)
    };

    if let Some(hint) = err.hint() {
        if use_color {
            out.push_str(&format!("\n\x1b[1;36mhint:\x1b[0m {}", hint));
        } else {
            out.push_str(&format!("\nhint: {}", hint));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_with_hint() {
        let err = Error::UnrecognizedTransform {
            name: "enchx".into(),
            suggestion: Some("enchex".into()),
        };
        assert_eq!(
            render(&err, false),
            "error: unrecognized transform 'enchx'\n\
             hint: did you mean 'enchex'? run `transform-d show` to list all transforms"
        );
    }

    #[test]
    fn test_render_colored() {
        let err = Error::Io(std::io::Error::other("broken pipe"));
        let rendered = render(&err, true);
        assert!(rendered.starts_with("\x1b[1;31merror:\x1b[0m "));
        assert!(!rendered.contains("hint:"));
    }

    #[test]
    fn test_no_color_flag_wins() {
        assert!(!should_use_color(true));
    }
}
