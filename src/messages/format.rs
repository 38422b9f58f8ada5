/// Substitutes positional placeholders in a message template
///
/// Each `{i}` token is replaced with `args[i]`. Tokens with no matching
/// argument are left as-is, and argument text is never rescanned, so a file
/// name containing `{1}` is printed literally.
///
/// # Examples
///
/// ```
/// use home_janitor::format_template;
///
/// let line = format_template("Failed to delete {0}: {1}", &["server-1.log", "denied"]);
/// assert_eq!(line, "Failed to delete server-1.log: denied");
/// ```
pub fn format_template(template: &str, args: &[&str]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg, close))
        });

        match substituted {
            Some((arg, close)) => {
                result.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                result.push('{');
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}
