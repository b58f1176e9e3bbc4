#[derive(Clone, Copy, Debug)]
pub(crate) struct CommandSpec {
    pub command: &'static str,
    pub action: &'static str,
}

/// Commands whose whole remainder is one free-text argument, stored under `key`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TextCommandSpec {
    pub command: &'static str,
    pub action: &'static str,
    pub key: &'static str,
}

pub(crate) const TEXT_ARG_COMMANDS: &[TextCommandSpec] = &[
    TextCommandSpec {
        command: "tab",
        action: "select_tab",
        key: "tab",
    },
    TextCommandSpec {
        command: "prompt",
        action: "set_prompt",
        key: "prompt",
    },
    TextCommandSpec {
        command: "category",
        action: "select_category",
        key: "category",
    },
    TextCommandSpec {
        command: "filter",
        action: "set_filter",
        key: "filter",
    },
    TextCommandSpec {
        command: "aspect",
        action: "set_aspect_ratio",
        key: "aspect_ratio",
    },
    TextCommandSpec {
        command: "reference",
        action: "set_reference",
        key: "source",
    },
];

pub(crate) const INDEX_COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        command: "load",
        action: "load_saved",
    },
    CommandSpec {
        command: "delete",
        action: "delete_saved",
    },
    CommandSpec {
        command: "preset",
        action: "use_preset",
    },
    CommandSpec {
        command: "count",
        action: "set_count",
    },
];

pub(crate) const SINGLE_PATH_COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        command: "image",
        action: "upload_image",
    },
    CommandSpec {
        command: "content",
        action: "upload_content",
    },
    CommandSpec {
        command: "style",
        action: "upload_style",
    },
    CommandSpec {
        command: "download",
        action: "download",
    },
];

pub(crate) const NO_ARG_COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        command: "help",
        action: "help",
    },
    CommandSpec {
        command: "tabs",
        action: "list_tabs",
    },
    CommandSpec {
        command: "generate",
        action: "generate",
    },
    CommandSpec {
        command: "status",
        action: "status",
    },
    CommandSpec {
        command: "wait",
        action: "wait",
    },
    CommandSpec {
        command: "save",
        action: "save_prompt",
    },
    CommandSpec {
        command: "saved",
        action: "list_saved",
    },
    CommandSpec {
        command: "drawer",
        action: "toggle_drawer",
    },
    CommandSpec {
        command: "presets",
        action: "list_presets",
    },
    CommandSpec {
        command: "pro",
        action: "toggle_premium",
    },
    CommandSpec {
        command: "clear_reference",
        action: "clear_reference",
    },
    CommandSpec {
        command: "camera",
        action: "camera_capture",
    },
    CommandSpec {
        command: "copy",
        action: "copy_code",
    },
    CommandSpec {
        command: "quit",
        action: "quit",
    },
];

pub(crate) const DRAG_COMMAND: CommandSpec = CommandSpec {
    command: "drag",
    action: "drag",
};

pub const SHELL_HELP_COMMANDS: &[&str] = &[
    "/tabs",
    "/tab",
    "/prompt",
    "/generate",
    "/status",
    "/wait",
    "/save",
    "/saved",
    "/load",
    "/delete",
    "/drawer",
    "/presets",
    "/category",
    "/filter",
    "/preset",
    "/drag",
    "/pro",
    "/aspect",
    "/count",
    "/reference",
    "/clear_reference",
    "/image",
    "/content",
    "/style",
    "/camera",
    "/copy",
    "/download",
    "/quit",
];
