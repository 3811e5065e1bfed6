use std::collections::BTreeMap;

/// Translations must mirror the fallback file: same message IDs, and the
/// same `$variables` in each message so `t!` callers keep working.
const EN_US: &str = include_str!("../i18n/en-US/pulseboard_ui.ftl");
const LOCALES: &[(&str, &str)] = &[("es-ES", include_str!("../i18n/es-ES/pulseboard_ui.ftl"))];

/// Message ID -> sorted variable names.
fn messages(src: &str) -> BTreeMap<String, Vec<String>> {
    let mut out = BTreeMap::new();
    for line in src.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(['#', '.', '-']) {
            continue;
        }
        let Some((id, body)) = trimmed.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if id.is_empty() || id.contains(char::is_whitespace) {
            continue;
        }
        let mut vars: Vec<String> = body
            .split('$')
            .skip(1)
            .map(|tail| {
                tail.chars()
                    .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                    .collect()
            })
            .collect();
        vars.sort();
        assert!(
            out.insert(id.to_string(), vars).is_none(),
            "duplicate message `{id}`"
        );
    }
    out
}

#[test]
fn all_locales_mirror_fallback() {
    let fallback = messages(EN_US);
    assert!(!fallback.is_empty(), "fallback has no messages");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let translated = messages(src);
        for (id, vars) in &fallback {
            match translated.get(id) {
                None => failures.push(format!("{locale}: missing `{id}`")),
                Some(found) if found != vars => failures.push(format!(
                    "{locale}: `{id}` uses {found:?}, fallback uses {vars:?}"
                )),
                Some(_) => {}
            }
        }
        for id in translated.keys().filter(|id| !fallback.contains_key(*id)) {
            failures.push(format!("{locale}: stray `{id}`"));
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn line_title_takes_the_filter() {
    assert_eq!(messages(EN_US)["chart-line-title"], ["filter"]);
}
