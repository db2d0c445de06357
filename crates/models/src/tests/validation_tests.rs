use crate::errors::ModelError;
use crate::post::{validate_title, TITLE_MAX_CHARS};

fn title_errors(raw: Option<&str>) -> Vec<String> {
    match validate_title(raw) {
        Err(ModelError::Validation(f)) => f.get("title").map(<[String]>::to_vec).unwrap_or_default(),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn missing_and_empty_titles_are_required() {
    for raw in [None, Some(""), Some("   "), Some("\t\n")] {
        assert_eq!(title_errors(raw), ["The title field is required."]);
    }
}

#[test]
fn valid_title_is_trimmed() {
    assert_eq!(validate_title(Some("  hola ")).unwrap(), "hola");
    assert_eq!(validate_title(Some("El post de prueba")).unwrap(), "El post de prueba");
}

#[test]
fn length_limit_counts_characters() {
    let at_limit = "ñ".repeat(TITLE_MAX_CHARS);
    assert!(validate_title(Some(&at_limit)).is_ok());

    let over = "a".repeat(TITLE_MAX_CHARS + 1);
    assert_eq!(
        title_errors(Some(&over)),
        ["The title may not be greater than 255 characters."]
    );
}
