use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use stepform::WizardError;
use stepform::app::App;
use stepform::record::Record;
use stepform::step_builder::StepBuilder;
use stepform::submit::SubmitHandler;
use stepform::terminal::Terminal;
use stepform::terminal_event::TerminalEvent;
use stepform::validation::ValidationContext;
use stepform::validators;
use stepform::wizard::Wizard;
use stepform::{checkbox_input::CheckboxInput, number_input::NumberInput, text_input::TextInput};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), WizardError> {
    let mut terminal = Terminal::new()?;
    terminal.enter_raw_mode()?;
    terminal.set_line_wrap(false)?;
    terminal.hide_cursor()?;

    let result = event_loop(&mut terminal);

    terminal.show_cursor()?;
    terminal.set_line_wrap(true)?;
    terminal.exit_raw_mode()?;

    let mut app = result?;

    if let Some(err) = app.take_submit_error() {
        return Err(err.into());
    }

    if app.completed() {
        if let Some(record) = app.submitted_record() {
            println!("Submitted:");
            println!("{}", record.to_json()?);
        }
    } else {
        println!("Cancelled.");
    }

    Ok(())
}

fn event_loop(terminal: &mut Terminal) -> io::Result<App> {
    let submit: SubmitHandler = Arc::new(|_record: &Record| {
        // Stand-in for the real backend call.
        thread::sleep(Duration::from_secs(3));
        Ok(())
    });
    let mut app = App::new(build_wizard(), submit);

    let mut render_requested = true;

    loop {
        if terminal.poll(Duration::from_millis(100))? {
            match terminal.read_event()? {
                TerminalEvent::Key(key_event) => {
                    app.handle_key(key_event);
                    render_requested = true;
                }
                TerminalEvent::Resize { .. } => {
                    render_requested = true;
                }
            }
        }

        if app.tick() {
            render_requested = true;
        }

        if render_requested {
            app.render(terminal)?;
            render_requested = false;
        }

        if app.should_exit() {
            break;
        }
    }

    app.renderer.move_to_end(terminal)?;
    terminal.clear_from_cursor_down()?;

    Ok(app)
}

fn build_wizard() -> Wizard {
    let general = StepBuilder::new("General Info")
        .hint("Tab/Shift+Tab to move between fields, Enter to continue")
        .input(
            TextInput::new("first_name", "First Name")
                .with_min_width(24)
                .with_validator(validators::required()),
        )
        .input(
            TextInput::new("last_name", "Last Name")
                .with_min_width(24)
                .with_validator(validators::required()),
        )
        .input(CheckboxInput::new("millionaire", "I am a Millionaire"))
        .build();

    let bank = StepBuilder::new("Bank Account")
        .input(
            NumberInput::new("money", "All the money I have")
                .with_min_width(16)
                .with_validator(validators::required()),
        )
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
        .input(TextInput::new("description", "Description").with_min_width(32))
        .build();

    Wizard::new(vec![general, bank, more])
}
