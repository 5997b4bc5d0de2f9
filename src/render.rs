use crate::link::LinkRecord;

/// Format resolved records as Markdown, one line per record, by substituting
/// the literal placeholders `{title}`, `{number}`, `{repo}`, `{owner}` and
/// `{url}` in `template`.
///
/// Pending indices contribute no line; callers pass records in ascending
/// index order. The result carries no trailing newline.
pub fn render<'a>(
    records: impl IntoIterator<Item = &'a LinkRecord>,
    template: &str,
) -> String {
    records
        .into_iter()
        .map(|record| {
            template
                .replace("{title}", &record.title)
                .replace("{number}", &record.number.to_string())
                .replace("{repo}", &record.repo)
                .replace("{owner}", &record.owner)
                .replace("{url}", &record.url)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod test {
    use super::*;

    fn record(title: &str, number: u64, owner: &str, repo: &str, url: &str) -> LinkRecord {
        LinkRecord {
            url: url.to_string(),
            title: title.to_string(),
            number,
            owner: owner.to_string(),
            repo: repo.to_string(),
        }
    }

    #[test]
    fn substitutes_all_placeholders() {
        let record = record(
            "Fix bug",
            42,
            "acme",
            "widgets",
            "https://github.com/acme/widgets/issues/42",
        );
        assert_eq!(
            render([&record], "[{title} #{number}]({url})"),
            "[Fix bug #42](https://github.com/acme/widgets/issues/42)",
        );
        assert_eq!(
            render([&record], "{owner}/{repo}#{number}: {title}"),
            "acme/widgets#42: Fix bug",
        );
    }

    #[test]
    fn joins_lines_without_trailing_newline() {
        let one = record("One", 1, "acme", "widgets", "u1");
        let two = record("Two", 2, "acme", "widgets", "u2");
        assert_eq!(render([&one, &two], "{title}"), "One\nTwo");
    }

    #[test]
    fn no_records_renders_empty() {
        assert_eq!(render(std::iter::empty::<&LinkRecord>(), "{title}"), "");
    }

    #[test]
    fn placeholder_free_template_repeats_verbatim() {
        let one = record("One", 1, "acme", "widgets", "u1");
        let two = record("Two", 2, "acme", "widgets", "u2");
        assert_eq!(render([&one, &two], "- item"), "- item\n- item");
    }
}
