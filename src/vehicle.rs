//! Vehicles moved through a single `dyn Vehicle` entry point.

use std::io::Write;

use log::debug;

use crate::error::{DemoError, Result};

pub trait Vehicle {
    fn make(&self) -> &str;
    fn model(&self) -> &str;

    /// The line printed when this vehicle moves.
    ///
    /// Only concrete vehicles know how they move; the default signals
    /// [`DemoError::Unimplemented`].
    fn move_message(&self) -> Result<String> {
        Err(DemoError::Unimplemented { operation: "move" })
    }

    fn move_along(&self, out: &mut dyn Write) -> Result<()> {
        let message = self.move_message()?;
        writeln!(out, "{message}")?;
        Ok(())
    }
}

/// A vehicle with no movement of its own.
#[derive(Debug, Clone)]
pub struct BaseVehicle {
    make: String,
    model: String,
}

impl BaseVehicle {
    pub fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        BaseVehicle {
            make: make.into(),
            model: model.into(),
        }
    }
}

impl Vehicle for BaseVehicle {
    fn make(&self) -> &str {
        &self.make
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Clone)]
pub struct Car {
    make: String,
    model: String,
    drive_type: String,
}

impl Car {
    /// `drive_type` is the drivetrain, e.g. "FWD", "RWD" or "AWD".
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        drive_type: impl Into<String>,
    ) -> Self {
        let car = Car {
            make: make.into(),
            model: model.into(),
            drive_type: drive_type.into(),
        };
        debug!("created car {} {} ({})", car.make, car.model, car.drive_type);
        car
    }

    pub fn drive_type(&self) -> &str {
        &self.drive_type
    }
}

impl Vehicle for Car {
    fn make(&self) -> &str {
        &self.make
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn move_message(&self) -> Result<String> {
        Ok(format!(
            "The {} {} is driving on the road! 🚗",
            self.make, self.model
        ))
    }
}

#[derive(Debug, Clone)]
pub struct Plane {
    make: String,
    model: String,
    num_engines: u32,
}

impl Plane {
    pub fn new(make: impl Into<String>, model: impl Into<String>, num_engines: u32) -> Self {
        let plane = Plane {
            make: make.into(),
            model: model.into(),
            num_engines,
        };
        debug!(
            "created plane {} {} with {} engines",
            plane.make, plane.model, plane.num_engines
        );
        plane
    }

    pub fn num_engines(&self) -> u32 {
        self.num_engines
    }
}

impl Vehicle for Plane {
    fn make(&self) -> &str {
        &self.make
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn move_message(&self) -> Result<String> {
        Ok(format!(
            "The {} {} is flying high above the clouds! ✈️",
            self.make, self.model
        ))
    }
}

/// Moves any vehicle without knowing which kind it is.
pub fn transport_item(vehicle: &dyn Vehicle, out: &mut dyn Write) -> Result<()> {
    debug!("transporting {} {}", vehicle.make(), vehicle.model());
    writeln!(
        out,
        "\nTime to get moving in the {} {}!",
        vehicle.make(),
        vehicle.model()
    )?;
    vehicle.move_along(out)
}

pub fn run_demo(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "--- Creating Objects ---")?;
    let fleet: Vec<Box<dyn Vehicle>> = vec![
        Box::new(Car::new("Ford", "Focus", "FWD")),
        Box::new(Plane::new("Boeing", "747", 4)),
    ];

    writeln!(out, "\n--- Demonstrating Polymorphism ---")?;
    for vehicle in &fleet {
        transport_item(vehicle.as_ref(), out)?;
    }
    Ok(())
}
