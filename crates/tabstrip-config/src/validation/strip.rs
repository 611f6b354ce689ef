//! Strip section validation (class names, arrow padding).

use crate::schema::TabStripConfig;

use super::helpers::{validate_class_token, validate_range_f64};

pub(crate) fn validate_strip(errors: &mut Vec<String>, config: &TabStripConfig) {
    let strip = &config.strip;

    validate_class_token(errors, "strip.prefix_cls", &strip.prefix_cls);

    if let Some(class_name) = &strip.class_name {
        for token in class_name.split_whitespace() {
            validate_class_token(errors, "strip.class_name", token);
        }
    }

    validate_range_f64(errors, "strip.arrow_padding", strip.arrow_padding, 0.0, 200.0);
}
