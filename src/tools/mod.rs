//! Tool widgets and the manager that owns them.
//!
//! Every widget is constructed once by [`ToolManager::new`] and kept in a map
//! keyed by [`ToolId`]. Opening a tool resets it and makes it the active one;
//! after every change the manager renders the active widget's display to its
//! surface.

use crate::calculator::{Calculator, Key};
use crate::config::LumiraConfig;
use crate::converter::{Category, Converter};
use crate::error::Result;
use crate::render::DisplaySurface;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// Identifier of a tool widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    Calculator,
    Converter,
}

impl ToolId {
    pub const ALL: [ToolId; 2] = [Self::Calculator, Self::Converter];

    /// Title shown for the tool.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Calculator => "Calculator",
            Self::Converter => "Unit Converter",
        }
    }
}

/// A constructed tool widget.
#[derive(Clone, Debug)]
pub enum Widget {
    Calculator(Calculator),
    Converter(Converter),
}

impl Widget {
    /// Build a widget from configuration.
    pub fn build(id: ToolId, config: &LumiraConfig) -> Self {
        match id {
            ToolId::Calculator => {
                Self::Calculator(Calculator::with_max_input_len(config.calculator.max_input_len))
            }
            ToolId::Converter => Self::Converter(Converter::with_settings(
                config.converter.decimals,
                config.converter.default_category,
            )),
        }
    }

    pub fn id(&self) -> ToolId {
        match self {
            Self::Calculator(_) => ToolId::Calculator,
            Self::Converter(_) => ToolId::Converter,
        }
    }

    /// The string the widget currently shows.
    pub fn display(&self) -> String {
        match self {
            Self::Calculator(calc) => calc.display().to_string(),
            Self::Converter(conv) => conv.display(),
        }
    }

    /// Return to the state the widget has when first opened.
    pub fn reset(&mut self) {
        match self {
            Self::Calculator(calc) => calc.clear(),
            Self::Converter(conv) => conv.reset(),
        }
    }
}

impl From<Calculator> for Widget {
    fn from(calc: Calculator) -> Self {
        Self::Calculator(calc)
    }
}

impl From<Converter> for Widget {
    fn from(conv: Converter) -> Self {
        Self::Converter(conv)
    }
}

/// Owns every widget and the surface they render to.
pub struct ToolManager<S: DisplaySurface> {
    tools: HashMap<ToolId, Widget>,
    active: Option<ToolId>,
    surface: S,
}

impl<S: DisplaySurface> ToolManager<S> {
    pub fn new(config: &LumiraConfig, surface: S) -> Self {
        let tools = ToolId::ALL
            .into_iter()
            .map(|id| (id, Widget::build(id, config)))
            .collect();

        Self {
            tools,
            active: None,
            surface,
        }
    }

    /// Reset a tool, make it active and render it.
    pub fn open_tool(&mut self, id: ToolId) {
        if let Some(widget) = self.tools.get_mut(&id) {
            widget.reset();
            info!("Opened {}", id.title());
            self.active = Some(id);
            self.render();
        }
    }

    /// Close the active tool, if any.
    pub fn close(&mut self) {
        if let Some(id) = self.active.take() {
            debug!("Closed {}", id.title());
        }
    }

    pub fn active(&self) -> Option<ToolId> {
        self.active
    }

    pub fn widget(&self, id: ToolId) -> Option<&Widget> {
        self.tools.get(&id)
    }

    pub fn calculator(&self) -> Option<&Calculator> {
        match self.tools.get(&ToolId::Calculator) {
            Some(Widget::Calculator(calc)) => Some(calc),
            _ => None,
        }
    }

    pub fn converter(&self) -> Option<&Converter> {
        match self.tools.get(&ToolId::Converter) {
            Some(Widget::Converter(conv)) => Some(conv),
            _ => None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Press a calculator key. Ignored unless the calculator is open.
    ///
    /// Returns whether the key was handled.
    pub fn press(&mut self, key: Key) -> bool {
        if self.active != Some(ToolId::Calculator) {
            debug!(?key, "Key ignored, calculator not open");
            return false;
        }
        if let Some(Widget::Calculator(calc)) = self.tools.get_mut(&ToolId::Calculator) {
            calc.press(key);
        }
        self.render();
        true
    }

    /// Press a sequence of calculator keys, rendering after each one.
    pub fn press_all(&mut self, keys: impl IntoIterator<Item = Key>) -> bool {
        keys.into_iter().all(|key| self.press(key))
    }

    /// Set every converter field at once and render the result.
    ///
    /// Ignored unless the converter is open.
    pub fn convert(&mut self, category: Category, from: &str, to: &str, input: &str) -> Result<bool> {
        if self.active != Some(ToolId::Converter) {
            debug!("Conversion ignored, converter not open");
            return Ok(false);
        }
        if let Some(Widget::Converter(conv)) = self.tools.get_mut(&ToolId::Converter) {
            conv.select(category, from, to)?;
            conv.set_input(input);
        }
        self.render();
        Ok(true)
    }

    fn render(&mut self) {
        let Some(widget) = self.active.and_then(|id| self.tools.get(&id)) else {
            return;
        };
        let display = widget.display();
        self.surface.render(&display);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Operator, parse_keys};
    use crate::error::LumiraError;
    use crate::render::RecordingSurface;

    fn manager() -> ToolManager<RecordingSurface> {
        ToolManager::new(&LumiraConfig::default(), RecordingSurface::new())
    }

    #[test]
    fn test_all_tools_constructed() {
        let tools = manager();
        for id in ToolId::ALL {
            assert_eq!(tools.widget(id).map(Widget::id), Some(id));
        }
        assert!(tools.active().is_none());
    }

    #[test]
    fn test_open_renders_initial_display() {
        let mut tools = manager();
        tools.open_tool(ToolId::Calculator);
        assert_eq!(tools.active(), Some(ToolId::Calculator));
        assert_eq!(tools.surface().frames(), ["0"]);
    }

    #[test]
    fn test_render_after_every_key() {
        let mut tools = manager();
        tools.open_tool(ToolId::Calculator);
        assert!(tools.press_all(parse_keys("1 . 5 + 2 =").unwrap()));
        assert_eq!(
            tools.surface().frames(),
            ["0", "1", "1.", "1.5", "1.5", "2", "3.5"]
        );
    }

    #[test]
    fn test_keys_ignored_when_closed() {
        let mut tools = manager();
        assert!(!tools.press(Key::Digit(4)));
        tools.open_tool(ToolId::Calculator);
        tools.close();
        assert!(!tools.press(Key::Digit(4)));
        assert_eq!(tools.calculator().map(Calculator::display), Some("0"));
    }

    #[test]
    fn test_reopen_resets_calculator() {
        let mut tools = manager();
        tools.open_tool(ToolId::Calculator);
        tools.press_all([Key::Digit(9), Key::Operator(Operator::Multiply), Key::Digit(3)]);
        assert_eq!(tools.surface().last(), Some("3"));

        tools.close();
        tools.open_tool(ToolId::Calculator);
        let calc = tools.calculator().unwrap();
        assert_eq!(calc.display(), "0");
        assert!(calc.pending().is_none());
        assert_eq!(tools.surface().last(), Some("0"));
    }

    #[test]
    fn test_configured_input_cap() {
        let mut config = LumiraConfig::default();
        config.calculator.max_input_len = 4;
        let mut tools = ToolManager::new(&config, RecordingSurface::new());
        tools.open_tool(ToolId::Calculator);
        tools.press_all(parse_keys("123456").unwrap());
        assert_eq!(tools.surface().last(), Some("1234"));
    }

    #[test]
    fn test_converter_through_manager() {
        let mut tools = manager();
        tools.open_tool(ToolId::Converter);
        assert_eq!(tools.converter().map(Converter::category), Some(Category::Length));

        assert!(tools.convert(Category::Temperature, "c", "k", "0").unwrap());
        assert_eq!(tools.surface().last(), Some("273.15"));

        let frames = tools.surface().frames().len();
        let result = tools.convert(Category::Weight, "kg", "km", "1");
        assert!(matches!(result, Err(LumiraError::UnknownUnit(_))));

        let conv = tools.converter().unwrap();
        assert_eq!(conv.category(), Category::Temperature);
        assert_eq!(conv.to_unit().symbol, "k");
        assert_eq!(tools.surface().frames().len(), frames);
        assert_eq!(tools.surface().last(), Some(conv.display().as_str()));
    }

    #[test]
    fn test_converter_ignored_when_calculator_active() {
        let mut tools = manager();
        tools.open_tool(ToolId::Calculator);
        assert!(!tools.convert(Category::Length, "km", "m", "1").unwrap());
    }
}
