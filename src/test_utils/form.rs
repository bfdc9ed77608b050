use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("want a form element, got none")
}

fn find_input<'a>(form: &ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    form.select(&Selector::parse("input").unwrap())
        .find(|input| input.value().attr("name") == Some(name))
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(form: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let got = form
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("want form with a {attribute} attribute, got none"));

    assert_eq!(
        got, endpoint,
        "want form with {attribute}=\"{endpoint}\", got {got:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    let input =
        find_input(form, name).unwrap_or_else(|| panic!("want an input named {name:?}, got none"));

    let got_type = input.value().attr("type").unwrap_or_default();
    assert_eq!(
        got_type, type_,
        "want input {name:?} with type {type_:?}, got {got_type:?}"
    );
    assert!(
        input.value().attr("required").is_some(),
        "want input {name:?} to have the required attribute"
    );
}

#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    let input =
        find_input(form, name).unwrap_or_else(|| panic!("want an input named {name:?}, got none"));

    let got_type = input.value().attr("type").unwrap_or_default();
    let got_value = input.value().attr("value").unwrap_or_default();
    assert_eq!(
        got_type, type_,
        "want input {name:?} with type {type_:?}, got {got_type:?}"
    );
    assert_eq!(
        got_value, value,
        "want input {name:?} with value {value:?}, got {got_value:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let button = form
        .select(&Selector::parse("button").unwrap())
        .next()
        .expect("want a button element, got none");

    assert_eq!(
        button.value().attr("type").unwrap_or_default(),
        "submit",
        "want a button with type=\"submit\""
    );

    let got_text = button.text().collect::<String>();
    assert_eq!(got_text.trim(), text);
}

#[track_caller]
pub(crate) fn assert_form_error_message(form: &ElementRef<'_>, want_error_message: &str) {
    let got_error_message = form
        .select(&Selector::parse("p").unwrap())
        .next()
        .expect("want an error paragraph, got none")
        .text()
        .collect::<String>();

    assert_eq!(got_error_message.trim(), want_error_message);
}
