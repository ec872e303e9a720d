use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
fn must_get_named<'a>(form: &ElementRef<'a>, tag: &str, name: &str) -> ElementRef<'a> {
    let selector = Selector::parse(&format!("{tag}[name=\"{name}\"]")).unwrap();

    form.select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No {tag} found with name \"{name}\""))
}

#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    let input = must_get_named(form, "input", name);
    let input_type = input.value().attr("type").unwrap_or_default();

    assert_eq!(
        input_type, type_,
        "want input with type \"{type_}\", got {input_type:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    assert_form_input(form, name, type_);
    let input = must_get_named(form, "input", name);
    let input_value = input.value().attr("value").unwrap_or_default();

    assert_eq!(
        input_value, value,
        "want input with value \"{value}\", got {input_value:?}"
    );
}

#[track_caller]
pub(crate) fn assert_textarea_value(form: &ElementRef<'_>, name: &str, value: &str) {
    let textarea = must_get_named(form, "textarea", name);
    let got_value = textarea.text().collect::<String>();

    assert_eq!(
        got_value, value,
        "want textarea with value \"{value}\", got {got_value:?}"
    );
}

#[track_caller]
pub(crate) fn assert_selected_option(form: &ElementRef<'_>, name: &str, value: Option<&str>) {
    let select = must_get_named(form, "select", name);
    let selected = select
        .select(&Selector::parse("option[selected]").unwrap())
        .map(|option| option.value().attr("value").unwrap_or_default())
        .collect::<Vec<_>>();

    assert_eq!(
        selected,
        value.into_iter().collect::<Vec<_>>(),
        "want selected option {value:?} in select {name}, got {selected:?}"
    );
}
