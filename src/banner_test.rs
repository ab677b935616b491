use super::*;

#[test]
fn lines_carry_style_directive() {
    let config = BannerConfig::default();
    let [headline, subtitle] = banner_lines(&config);
    assert!(headline.0.starts_with("%c"));
    assert!(headline.0.contains("Software System Development"));
    assert!(subtitle.0.starts_with("%c"));
    assert_eq!(subtitle.1, config.subtitle_style);
}

#[test]
fn custom_text_is_used_verbatim() {
    let config = BannerConfig {
        headline: "Hello".to_owned(),
        headline_style: "color: red".to_owned(),
        subtitle: "World".to_owned(),
        subtitle_style: String::new(),
    };
    let [headline, subtitle] = banner_lines(&config);
    assert_eq!(headline, ("%cHello".to_owned(), "color: red"));
    assert_eq!(subtitle, ("%cWorld".to_owned(), ""));
}
