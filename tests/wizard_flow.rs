use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;
use stepform::app::App;
use stepform::node;
use stepform::record::Record;
use stepform::step_builder::StepBuilder;
use stepform::submit::SubmitHandler;
use stepform::terminal::{KeyCode, KeyEvent};
use stepform::validation::ValidationContext;
use stepform::validators;
use stepform::wizard::Wizard;
use stepform::{checkbox_input::CheckboxInput, number_input::NumberInput, text_input::TextInput};

fn build_wizard() -> Wizard {
    let general = StepBuilder::new("General Info")
        .input(TextInput::new("first_name", "First Name").with_validator(validators::required()))
        .input(TextInput::new("last_name", "Last Name").with_validator(validators::required()))
        .input(CheckboxInput::new("millionaire", "I am a Millionaire"))
        .build();

    let bank = StepBuilder::new("Bank Account")
        .input(NumberInput::new("money", "All the money I have").with_validator(validators::required()))
        .validator(|ctx: &ValidationContext| {
            if ctx.flag("millionaire") && ctx.number("money").unwrap_or(0.0) < 1_000_000.0 {
                vec![(
                    "money".to_string(),
                    "As a millionaire, you need to have min. 1M €".to_string(),
                )]
            } else {
                vec![]
            }
        })
        .build();

    let more = StepBuilder::new("More Info")
        .input(TextInput::new("description", "Description"))
        .build();

    Wizard::new(vec![general, bank, more])
}

fn counting_handler() -> (SubmitHandler, Arc<AtomicUsize>, Arc<Mutex<Option<Record>>>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::new(Mutex::new(None));
    let calls_in = Arc::clone(&calls);
    let seen_in = Arc::clone(&seen);
    let handler: SubmitHandler = Arc::new(move |record: &Record| {
        calls_in.fetch_add(1, Ordering::SeqCst);
        *seen_in.lock().unwrap() = Some(record.clone());
        Ok(())
    });
    (handler, calls, seen)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::plain(code));
    app.tick();
}

fn press_ctrl(app: &mut App, ch: char) {
    app.handle_key(KeyEvent::ctrl(KeyCode::Char(ch)));
    app.tick();
}

fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn wait_for_exit(app: &mut App) {
    for _ in 0..400 {
        app.tick();
        if app.should_exit() {
            return;
        }
        thread::sleep(Duration::from_millis(5));
    }
    panic!("app never exited");
}

#[test]
fn full_run_submits_the_accumulated_record_exactly_once() {
    let (handler, calls, seen) = counting_handler();
    let mut app = App::new(build_wizard(), handler);

    // General Info
    type_str(&mut app, "Ada");
    press(&mut app, KeyCode::Enter);
    type_str(&mut app, "Lovelace");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char(' ')); // millionaire = true
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state.wizard.current_index(), 1);

    // Bank Account
    type_str(&mut app, "2000000");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state.wizard.current_index(), 2);

    // More Info
    type_str(&mut app, "mathematician");
    press(&mut app, KeyCode::Enter);
    assert!(app.state.wizard.submitting());

    wait_for_exit(&mut app);

    assert!(app.completed());
    assert!(app.take_submit_error().is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let record = seen.lock().unwrap().take().expect("record was submitted");
    assert_eq!(record.len(), 5);
    assert_eq!(record.get("first_name").unwrap().as_text(), Some("Ada"));
    assert_eq!(record.get("last_name").unwrap().as_text(), Some("Lovelace"));
    assert_eq!(record.get("millionaire").unwrap().as_bool(), Some(true));
    assert_eq!(record.get("money").unwrap().as_number(), Some(2_000_000.0));
    assert_eq!(
        record.get("description").unwrap().as_text(),
        Some("mathematician")
    );
}

#[test]
fn validation_failure_keeps_the_step_and_never_submits() {
    let (handler, calls, _) = counting_handler();
    let mut app = App::new(build_wizard(), handler);

    // Enter on the empty required field: the error lands inline and the
    // wizard stays on step 0.
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state.wizard.current_index(), 0);

    let nodes = &app.state.wizard.current_step().nodes;
    let first = node::find_input(nodes, "first_name").expect("first_name exists");
    assert!(first.error().is_some());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn conditional_rule_reads_the_flag_captured_on_an_earlier_step() {
    let (handler, calls, _) = counting_handler();
    let mut app = App::new(build_wizard(), handler);

    type_str(&mut app, "Ada");
    press(&mut app, KeyCode::Enter);
    type_str(&mut app, "Lovelace");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state.wizard.current_index(), 1);

    // Not enough money for a millionaire: blocked on the bank step.
    type_str(&mut app, "5");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state.wizard.current_index(), 1);

    let nodes = &app.state.wizard.current_step().nodes;
    let money = node::find_input(nodes, "money").expect("money exists");
    assert_eq!(
        money.error(),
        Some("As a millionaire, you need to have min. 1M €")
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn values_survive_going_back_and_forward() {
    let (handler, _, _) = counting_handler();
    let mut app = App::new(build_wizard(), handler);

    type_str(&mut app, "Ada");
    press(&mut app, KeyCode::Enter);
    type_str(&mut app, "Lovelace");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state.wizard.current_index(), 1);

    press_ctrl(&mut app, 'b');
    assert_eq!(app.state.wizard.current_index(), 0);

    let nodes = &app.state.wizard.current_step().nodes;
    let first = node::find_input(nodes, "first_name").expect("first_name exists");
    assert_eq!(first.value(), "Ada");
    assert_eq!(
        app.state.wizard.record().get("first_name").unwrap().as_text(),
        Some("Ada")
    );
}

#[test]
fn submit_errors_propagate_to_the_caller() {
    let handler: SubmitHandler = Arc::new(|_: &Record| {
        Err(stepform::submit::SubmitError::new("backend said no"))
    });
    let mut app = App::new(
        Wizard::new(vec![
            StepBuilder::new("Only Step")
                .input(TextInput::new("name", "Name"))
                .build(),
        ]),
        handler,
    );

    type_str(&mut app, "Ada");
    press(&mut app, KeyCode::Enter);
    assert!(app.state.wizard.submitting());

    wait_for_exit(&mut app);

    assert!(!app.completed());
    let err = app.take_submit_error().expect("error should surface");
    assert_eq!(err.to_string(), "backend said no");
}
