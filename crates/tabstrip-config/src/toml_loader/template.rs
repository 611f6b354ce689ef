//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Tab strip configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[strip]
# orientation = "horizontal"   # horizontal, vertical
# variant = "card"             # card, line, borderless-card
# size = "md"                  # sm, md, lg
# closable = false
# prefix_cls = "zw-tabs"
# class_name = ""
# arrow_padding = 20.0         # 0-200 px

[logging]
# level = "info"               # trace, debug, info, warn, error
"##
    .to_string()
}
