use console::Style;

pub fn index() -> Style {
    Style::new().yellow()
}

pub fn heading() -> Style {
    Style::new().bold()
}

pub fn label() -> Style {
    Style::new().dim()
}

pub fn time() -> Style {
    Style::new().color256(246).italic()
}

pub fn info() -> Style {
    Style::new().dim()
}

pub fn success() -> Style {
    Style::new().green()
}

pub fn warning() -> Style {
    Style::new().yellow()
}
