mod common;

use golf_club::error::{AppError, REQUIRED_FIELDS_MESSAGE};
use golf_club::models::{LessonType, MatchVisibility, PaymentMethod, Session};
use golf_club::screens::lesson::{self, LessonForm};
use golf_club::screens::tee_time::{self, TeeTimeForm};

#[test]
fn tee_time_options_list_slots_and_courses() {
    let state = common::state();
    let session = common::member(&state);
    let options = tee_time::options(&state, &session).unwrap();
    assert_eq!(options.times.len(), 24);
    assert_eq!(options.times.first().map(String::as_str), Some("06:00"));
    assert_eq!(options.times.last().map(String::as_str), Some("17:30"));
    assert_eq!(options.courses.len(), 3);
    assert_eq!(options.max_players, 4);
    assert_eq!(options.payment_methods.len(), 3);
}

#[test]
fn guest_cannot_book() {
    let state = common::state();
    let err = tee_time::submit(&state, &Session::guest(), TeeTimeForm::default(), common::today());
    assert!(matches!(err, Err(AppError::Forbidden { .. })));
}

#[test]
fn empty_tee_time_form_lists_missing_fields() {
    let state = common::state();
    let session = common::member(&state);
    let err = tee_time::submit(&state, &session, TeeTimeForm::default(), common::today()).unwrap_err();
    assert_eq!(
        err,
        AppError::Validation(format!("{REQUIRED_FIELDS_MESSAGE} (date, time)"))
    );
}

#[test]
fn tee_time_books_on_chosen_course() {
    let state = common::state();
    let session = common::member(&state);
    let form = TeeTimeForm {
        date: "2025-06-07".to_string(),
        time: "07:30".to_string(),
        course: "practice".to_string(),
        visibility: MatchVisibility::Private,
        players: Some(2),
        payment_method: PaymentMethod::ApplePay,
        ..TeeTimeForm::default()
    };
    let confirmation = tee_time::submit(&state, &session, form, common::today()).unwrap();
    assert_eq!(confirmation.total, 25);
    assert_eq!(confirmation.payment_method, PaymentMethod::ApplePay);
    assert_eq!(
        confirmation.message,
        "Your tee time has been booked for Saturday, June 7, 2025 at 07:30"
    );
}

#[test]
fn tee_time_rejects_past_date_and_off_grid_time() {
    let state = common::state();
    let session = common::member(&state);
    let past = TeeTimeForm {
        date: "2025-05-31".to_string(),
        time: "07:30".to_string(),
        ..TeeTimeForm::default()
    };
    assert!(matches!(
        tee_time::submit(&state, &session, past, common::today()),
        Err(AppError::Validation(_))
    ));

    let off_grid = TeeTimeForm {
        date: "2025-06-07".to_string(),
        time: "18:00".to_string(),
        ..TeeTimeForm::default()
    };
    assert!(matches!(
        tee_time::submit(&state, &session, off_grid, common::today()),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn lesson_options_flag_group_discount() {
    let state = common::state();
    let session = common::member(&state);
    let options = lesson::options(&state, &session).unwrap();
    let discounted: Vec<_> = options
        .lesson_types
        .iter()
        .filter(|t| t.discounted)
        .map(|t| t.id)
        .collect();
    assert_eq!(discounted, vec![LessonType::Group]);
    assert_eq!(options.group_discount_percent, 20);
    assert_eq!(options.times.len(), 22);
}

#[test]
fn group_lesson_is_discounted() {
    let state = common::state();
    let session = common::member(&state);
    let form = LessonForm {
        lesson_type: Some(LessonType::Group),
        instructor: "ahmed".to_string(),
        date: "2025-06-10".to_string(),
        time: "18:30".to_string(),
        ..LessonForm::default()
    };
    let confirmation = lesson::submit(&state, &session, form, common::today()).unwrap();
    assert_eq!(confirmation.total, 640);
    assert_eq!(confirmation.title, "Lesson Booked!");
}

#[test]
fn lesson_with_unknown_instructor_fails() {
    let state = common::state();
    let session = common::member(&state);
    let form = LessonForm {
        lesson_type: Some(LessonType::Private),
        instructor: "tiger".to_string(),
        ..LessonForm::default()
    };
    assert!(matches!(
        lesson::submit(&state, &session, form, common::today()),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn lesson_form_deserializes_from_camel_case() {
    let form: LessonForm = serde_json::from_value(serde_json::json!({
        "lessonType": "playing",
        "instructor": "omar",
        "paymentMethod": "cash"
    }))
    .unwrap();
    assert_eq!(form.lesson_type, Some(LessonType::Playing));
    assert_eq!(form.payment_method, PaymentMethod::Cash);
    assert!(form.date.is_empty());
}

#[test]
fn tee_time_with_unknown_course_is_a_form_error() {
    let state = common::state();
    let session = common::member(&state);
    let form = TeeTimeForm {
        date: "2025-06-07".to_string(),
        time: "07:30".to_string(),
        course: "moon".to_string(),
        ..TeeTimeForm::default()
    };
    match tee_time::submit(&state, &session, form, common::today()) {
        Err(AppError::Validation(msg)) => assert!(msg.contains("moon"), "{msg}"),
        other => panic!("unexpected {other:?}"),
    }
}
