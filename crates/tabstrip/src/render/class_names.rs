/// Join the class names whose flag is set, in order. Empty names are skipped.
pub fn class_names<I, S>(entries: I) -> String
where
    I: IntoIterator<Item = (S, bool)>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (name, enabled) in entries {
        let name = name.as_ref();
        if !enabled || name.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_enabled_in_order() {
        let cls = class_names([("a", true), ("b", false), ("c", true)]);
        assert_eq!(cls, "a c");
    }

    #[test]
    fn skips_empty_names() {
        let cls = class_names([("".to_string(), true), ("x".to_string(), true)]);
        assert_eq!(cls, "x");
    }

    #[test]
    fn nothing_enabled_is_empty() {
        assert_eq!(class_names([("a", false)]), "");
    }
}
