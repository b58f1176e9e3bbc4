use std::collections::BTreeMap;

use serde_json::Value;

use super::command_registry::{
    CommandSpec, DRAG_COMMAND, INDEX_COMMANDS, NO_ARG_COMMANDS, SINGLE_PATH_COMMANDS,
    TEXT_ARG_COMMANDS,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Intent {
    pub action: String,
    pub raw: String,
    pub prompt: Option<String>,
    pub command_args: BTreeMap<String, Value>,
}

impl Intent {
    fn new(action: &str, raw: &str) -> Self {
        Self {
            action: action.to_string(),
            raw: raw.to_string(),
            prompt: None,
            command_args: BTreeMap::new(),
        }
    }

    fn invalid(raw: &str, command: &str, message: String) -> Self {
        let mut intent = Self::new("invalid", raw);
        intent
            .command_args
            .insert("command".to_string(), Value::String(command.to_string()));
        intent
            .command_args
            .insert("error".to_string(), Value::String(message));
        intent
    }

    pub fn arg_str(&self, key: &str) -> Option<&str> {
        self.command_args.get(key).and_then(Value::as_str)
    }

    pub fn arg_i64(&self, key: &str) -> Option<i64> {
        self.command_args.get(key).and_then(Value::as_i64)
    }
}

fn find_action(command: &str, specs: &[CommandSpec]) -> Option<&'static str> {
    specs
        .iter()
        .find(|spec| spec.command == command)
        .map(|spec| spec.action)
}

fn parse_path_args(arg: &str) -> Vec<String> {
    if arg.trim().is_empty() {
        return Vec::new();
    }
    match shell_words::split(arg) {
        Ok(parts) => parts
            .into_iter()
            .filter(|value| !value.is_empty())
            .collect(),
        Err(_) => arg
            .split_whitespace()
            .map(str::to_string)
            .filter(|value| !value.is_empty())
            .collect(),
    }
}

fn parse_single_path_arg(arg: &str) -> String {
    parse_path_args(arg).join(" ")
}

fn parse_pointer_positions(arg: &str) -> Result<Vec<i64>, String> {
    let positions = arg
        .split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .map_err(|_| format!("'{part}' is not a pointer position"))
        })
        .collect::<Result<Vec<i64>, String>>()?;
    if positions.len() < 2 {
        return Err("/drag needs a start position and at least one move".to_string());
    }
    Ok(positions)
}

/// Parse one line of shell input. Plain text becomes a `generate` intent carrying the text as
/// the new prompt.
pub fn parse_intent(text: &str) -> Intent {
    let raw_trimmed = text.trim();
    if raw_trimmed.is_empty() {
        return Intent::new("noop", text);
    }

    if let Some(slash_tail) = raw_trimmed.strip_prefix('/') {
        let command_len = slash_tail
            .chars()
            .take_while(|ch| ch.is_ascii_alphanumeric() || *ch == '_')
            .count();
        if command_len > 0 {
            let command = slash_tail[..command_len].to_ascii_lowercase();
            let arg = slash_tail[command_len..].trim();

            if let Some(spec) = TEXT_ARG_COMMANDS.iter().find(|spec| spec.command == command) {
                let mut intent = Intent::new(spec.action, text);
                intent
                    .command_args
                    .insert(spec.key.to_string(), Value::String(arg.to_string()));
                return intent;
            }

            if let Some(action) = find_action(&command, INDEX_COMMANDS) {
                return match arg.parse::<i64>() {
                    Ok(index) => {
                        let mut intent = Intent::new(action, text);
                        intent
                            .command_args
                            .insert("index".to_string(), Value::Number(index.into()));
                        intent
                    }
                    Err(_) => Intent::invalid(
                        text,
                        &command,
                        format!("/{command} requires a number"),
                    ),
                };
            }

            if let Some(action) = find_action(&command, SINGLE_PATH_COMMANDS) {
                let mut intent = Intent::new(action, text);
                intent.command_args.insert(
                    "path".to_string(),
                    Value::String(parse_single_path_arg(arg)),
                );
                return intent;
            }

            if let Some(action) = find_action(&command, NO_ARG_COMMANDS) {
                return Intent::new(action, text);
            }

            if command == DRAG_COMMAND.command {
                return match parse_pointer_positions(arg) {
                    Ok(positions) => {
                        let mut intent = Intent::new(DRAG_COMMAND.action, text);
                        intent.command_args.insert(
                            "positions".to_string(),
                            Value::Array(
                                positions
                                    .into_iter()
                                    .map(|value| Value::Number(value.into()))
                                    .collect(),
                            ),
                        );
                        intent
                    }
                    Err(message) => Intent::invalid(text, &command, message),
                };
            }

            let mut intent = Intent::new("unknown", text);
            intent
                .command_args
                .insert("command".to_string(), Value::String(command));
            intent
                .command_args
                .insert("arg".to_string(), Value::String(arg.to_string()));
            return intent;
        }
    }

    let mut intent = Intent::new("generate", text);
    intent.prompt = Some(raw_trimmed.to_string());
    intent
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::parse_intent;

    #[test]
    fn blank_line_is_noop() {
        assert_eq!(parse_intent("   ").action, "noop");
    }

    #[test]
    fn plain_text_generates_with_prompt() {
        let intent = parse_intent("  a login form with tailwind  ");
        assert_eq!(intent.action, "generate");
        assert_eq!(intent.prompt.as_deref(), Some("a login form with tailwind"));
    }

    #[test]
    fn parse_text_argument_commands() {
        let tab = parse_intent("/tab image-remix");
        assert_eq!(tab.action, "select_tab");
        assert_eq!(tab.arg_str("tab"), Some("image-remix"));

        let category = parse_intent("/category Bidding & Trump");
        assert_eq!(category.action, "select_category");
        assert_eq!(category.command_args["category"], json!("Bidding & Trump"));

        let filter = parse_intent("/filter");
        assert_eq!(filter.action, "set_filter");
        assert_eq!(filter.arg_str("filter"), Some(""));
    }

    #[test]
    fn parse_index_commands() {
        let load = parse_intent("/load 2");
        assert_eq!(load.action, "load_saved");
        assert_eq!(load.arg_i64("index"), Some(2));

        let bad = parse_intent("/delete two");
        assert_eq!(bad.action, "invalid");
        assert_eq!(bad.arg_str("error"), Some("/delete requires a number"));
    }

    #[test]
    fn parse_quoted_paths() {
        let image = parse_intent("/image \"/tmp/a b.png\"");
        assert_eq!(image.action, "upload_image");
        assert_eq!(image.command_args["path"], json!("/tmp/a b.png"));

        let style = parse_intent("/style style.jpg");
        assert_eq!(style.action, "upload_style");
        assert_eq!(style.command_args["path"], json!("style.jpg"));
    }

    #[test]
    fn parse_drag_positions() {
        let drag = parse_intent("/drag 100 150, 90");
        assert_eq!(drag.action, "drag");
        assert_eq!(drag.command_args["positions"], json!([100, 150, 90]));

        assert_eq!(parse_intent("/drag 100").action, "invalid");
        assert_eq!(parse_intent("/drag 1 up").action, "invalid");
    }

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(parse_intent("/GENERATE").action, "generate");
        assert_eq!(parse_intent("/Pro").action, "toggle_premium");
    }

    #[test]
    fn parse_unknown_command() {
        let intent = parse_intent("/magic foo bar");
        assert_eq!(intent.action, "unknown");
        assert_eq!(intent.command_args["command"], json!("magic"));
        assert_eq!(intent.command_args["arg"], json!("foo bar"));
    }
}
