//! Linear customization steps with presence gating.

use shared::Selection;

use super::settings::WizardVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Base = 1,
    Height = 2,
    Color = 3,
    Filling = 4,
    Toppings = 5,
}

impl Step {
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Step::Base),
            2 => Some(Step::Height),
            3 => Some(Step::Color),
            4 => Some(Step::Filling),
            5 => Some(Step::Toppings),
            _ => None,
        }
    }

    /// i18n key of the step title
    pub fn title_key(self) -> &'static str {
        match self {
            Step::Base => "step.base",
            Step::Height => "step.height",
            Step::Color => "step.color",
            Step::Filling => "step.filling",
            Step::Toppings => "step.toppings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wizard {
    step: Step,
    variant: WizardVariant,
}

impl Wizard {
    pub fn new(variant: WizardVariant) -> Self {
        Self {
            step: Step::Base,
            variant,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn variant(&self) -> WizardVariant {
        self.variant
    }

    pub fn step_count(&self) -> u8 {
        self.variant.step_count()
    }

    pub fn is_last(&self) -> bool {
        self.step.number() >= self.step_count()
    }

    /// Whether the current step's requirement is met
    pub fn can_advance(&self, selection: &Selection) -> bool {
        if self.is_last() {
            return false;
        }
        match self.step {
            Step::Base => selection.shape.is_some(),
            Step::Height => selection.height.is_some(),
            Step::Color | Step::Filling | Step::Toppings => true,
        }
    }

    /// Advance one step if gating allows. Returns true on a move.
    pub fn next(&mut self, selection: &Selection) -> bool {
        if !self.can_advance(selection) {
            return false;
        }
        match Step::from_number(self.step.number() + 1) {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Go one step back. No-op on the first step.
    pub fn back(&mut self) -> bool {
        match Step::from_number(self.step.number().saturating_sub(1)) {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Back is only offered on the toppings step
    pub fn offers_back(&self) -> bool {
        self.step == Step::Toppings
    }

    pub fn reset(&mut self) {
        self.step = Step::Base;
    }

    /// "Step N of M"
    pub fn label(&self) -> String {
        format!("Step {} of {}", self.step.number(), self.step_count())
    }
}
