#[cfg(test)]
pub mod test_helpers {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::config::Config;
    use crate::field::FieldState;

    pub const FRUITS: &[&str] = &[
        "Apple",
        "Banana",
        "Blueberry",
        "Grape",
        "Mango",
        "Orange",
        "Pineapple",
        "Strawberry",
    ];

    pub fn fruits() -> Vec<String> {
        FRUITS.iter().map(|s| s.to_string()).collect()
    }

    pub fn test_app(config: &Config) -> App {
        App::new(fruits(), "", config).unwrap()
    }

    pub fn fruit_app() -> App {
        test_app(&Config::default())
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Type `text` one key at a time
    pub fn type_text(field: &mut FieldState, text: &str) {
        for c in text.chars() {
            field.apply_input(key(KeyCode::Char(c)));
        }
    }

    /// Render the whole app into a test terminal and return the screen text
    pub fn render_app(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().to_string()
    }
}
