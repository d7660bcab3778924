use crux_core::App;
use crux_core::macros::Effect;
use crux_core::render::Render;
use thiserror::Error;
use tracing::{debug, info, warn};
use stock::inventory::Inventory;
use stock::part::{Part, PartCode};

pub mod sample;

#[derive(Default)]
pub struct Stockroom;

#[derive(Default)]
pub struct Model {
    inventory: Inventory,
    selected: Option<PartCode>,

    message: Option<String>,
    error: Option<anyhow::Error>,
}

#[derive(Effect)]
pub struct Capabilities {
    render: Render<Event>,
}

#[derive(serde::Serialize, serde::Deserialize, Default, PartialEq, Debug)]
pub struct ViewModel {
    pub parts: Vec<PartRow>,
    pub selected: Option<PartRow>,

    pub message: Option<String>,
    pub error: Option<String>,
}

/// A row of the part table.
#[derive(serde::Serialize, serde::Deserialize, Clone, PartialEq, Debug)]
pub struct PartRow {
    pub code: PartCode,
    pub name: String,
    pub quantity: u32,
    pub location: String,
}

impl From<&Part> for PartRow {
    fn from(part: &Part) -> Self {
        Self {
            code: part.code(),
            name: part.name.clone(),
            quantity: part.quantity(),
            location: part.location.clone(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum StockDirection {
    In,
    Out,
}

impl StockDirection {
    /// stock-in adds, stock-out removes.
    pub fn delta(&self, amount: u32) -> i64 {
        match self {
            StockDirection::In => i64::from(amount),
            StockDirection::Out => -i64::from(amount),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockDirection::In => "Stock-in",
            StockDirection::Out => "Stock-out",
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub enum Event {
    None,
    LoadSampleParts,
    AddPart {
        name: String,
        code: PartCode,
        quantity: u32,
        location: String,
    },
    RemovePart { code: PartCode },
    SelectPart { code: PartCode },
    AdjustStock { code: PartCode, direction: StockDirection, amount: u32 },
}

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("All text fields must be filled in. name: '{name}', location: '{location}'")]
    EmptyTextField { name: String, location: String },

    #[error("Part not found. code: {code}")]
    PartNotFound { code: PartCode },
}

impl App for Stockroom {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Self::Event, model: &mut Self::Model, caps: &Self::Capabilities) {
        debug!("update. event: {:?}", event);

        model.message.take();
        model.error.take();

        match event {
            Event::None => {}
            Event::LoadSampleParts => {
                let added = sample::sample_parts().into_iter().fold(0, |added, part| {
                    match model.inventory.add(part) {
                        Ok(()) => added + 1,
                        Err(_) => added,
                    }
                });
                model.message.replace(format!("Loaded sample parts. count: {}", added));
            },
            Event::AddPart { name, code, quantity, location } => {
                match Self::add_part(&mut model.inventory, name, code, quantity, location) {
                    Ok(()) => {
                        model.message.replace(format!("Part added. code: {}", code));
                    },
                    Err(e) => {
                        model.error.replace(e);
                    }
                }
            },
            Event::RemovePart { code } => {
                if model.inventory.remove(code) {
                    if model.selected == Some(code) {
                        model.selected.take();
                    }
                    model.message.replace(format!("Part removed. code: {}", code));
                } else {
                    model.error.replace(InputError::PartNotFound { code }.into());
                }
            },
            Event::SelectPart { code } => {
                match model.inventory.find_by_code(code) {
                    Some(_) => {
                        model.selected.replace(code);
                    },
                    None => {
                        model.selected.take();
                        model.error.replace(InputError::PartNotFound { code }.into());
                    }
                }
            },
            Event::AdjustStock { code, direction, amount } => {
                let try_fn = |model: &mut Model| -> anyhow::Result<()> {
                    let name = model.inventory.find_by_code(code)
                        .ok_or(InputError::PartNotFound { code })?
                        .name.clone();

                    let quantity = model.inventory.adjust_quantity(code, direction.delta(amount))?;

                    info!("{} recorded. code: {}, amount: {}, quantity: {}", direction.label(), code, amount, quantity);
                    model.message.replace(format!("{} of {} recorded for '{}'. quantity: {}", direction.label(), amount, name, quantity));
                    Ok(())
                };

                if let Err(e) = try_fn(model) {
                    model.error.replace(e);
                }
            },
        }

        if let Some(error) = &model.error {
            warn!("{}", error);
        }

        caps.render.render();
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        let parts = model.inventory.list().iter()
            .map(PartRow::from)
            .collect();

        let selected = model.selected
            .and_then(|code| model.inventory.find_by_code(code))
            .map(PartRow::from);

        ViewModel {
            parts,
            selected,
            message: model.message.clone(),
            error: model.error.as_ref().map(|error| error.to_string()),
        }
    }
}

impl Stockroom {
    fn add_part(inventory: &mut Inventory, name: String, code: PartCode, quantity: u32, location: String) -> anyhow::Result<()> {
        let (name, location) = (name.trim(), location.trim());
        if name.is_empty() || location.is_empty() {
            return Err(InputError::EmptyTextField { name: name.to_string(), location: location.to_string() }.into())
        }

        let part = Part::new(name.to_string(), code, quantity, location.to_string());
        inventory.add(part)?;

        Ok(())
    }
}
