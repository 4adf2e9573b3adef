//! Superheroes: a base hero and a flying hero that reuses it.

use std::io::Write;

use log::debug;

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Superhero {
    pub name: String,
    pub superpower: String,
    weakness: String,
}

impl Superhero {
    pub fn new(
        name: impl Into<String>,
        superpower: impl Into<String>,
        weakness: impl Into<String>,
    ) -> Self {
        let hero = Superhero {
            name: name.into(),
            superpower: superpower.into(),
            weakness: weakness.into(),
        };
        debug!("created superhero {}", hero.name);
        hero
    }

    pub fn get_weakness(&self) -> String {
        self.weakness.clone()
    }
}

/// Behavior shared by every kind of hero.
pub trait Hero {
    fn profile(&self) -> &Superhero;

    fn superpower_message(&self) -> String {
        let hero = self.profile();
        format!("{} is using their power: {}!", hero.name, hero.superpower)
    }

    fn use_superpower(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.superpower_message())?;
        Ok(())
    }

    fn get_weakness(&self) -> String {
        self.profile().get_weakness()
    }
}

impl Hero for Superhero {
    fn profile(&self) -> &Superhero {
        self
    }
}

#[derive(Debug, Clone)]
pub struct FlyingSuperhero {
    hero: Superhero,
    /// mph
    pub flight_speed: u32,
}

impl FlyingSuperhero {
    pub fn new(
        name: impl Into<String>,
        superpower: impl Into<String>,
        weakness: impl Into<String>,
        flight_speed: u32,
    ) -> Self {
        let hero = Superhero::new(name, superpower, weakness);
        debug!("{} flies at {} mph", hero.name, flight_speed);
        FlyingSuperhero { hero, flight_speed }
    }

    pub fn name(&self) -> &str {
        &self.hero.name
    }

    pub fn superpower(&self) -> &str {
        &self.hero.superpower
    }

    pub fn fly(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "{} is soaring through the sky at {} mph!",
            self.hero.name, self.flight_speed
        )?;
        Ok(())
    }
}

impl Hero for FlyingSuperhero {
    fn profile(&self) -> &Superhero {
        &self.hero
    }

    fn superpower_message(&self) -> String {
        format!(
            "{} is taking flight! Their superpower is {}!",
            self.hero.name, self.hero.superpower
        )
    }
}

pub fn run_demo(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "--- Creating Objects ---")?;
    let hero_one = Superhero::new("Captain Courage", "Enhanced Strength", "Magic");
    let hero_two = FlyingSuperhero::new("Swiftwind", "Super Speed", "Extreme Cold", 800);

    writeln!(out, "\n--- Demonstrating the Base Class (Captain Courage) ---")?;
    writeln!(out, "Name: {}", hero_one.name)?;
    writeln!(out, "Superpower: {}", hero_one.superpower)?;
    hero_one.use_superpower(out)?;
    writeln!(out, "Weakness (using a public method): {}", hero_one.get_weakness())?;

    writeln!(out, "\n--- Demonstrating the Subclass (Swiftwind) ---")?;
    writeln!(out, "Name: {}", hero_two.name())?;
    writeln!(out, "Superpower: {}", hero_two.superpower())?;
    writeln!(out, "Flight Speed: {} mph", hero_two.flight_speed)?;
    hero_two.use_superpower(out)?;
    hero_two.fly(out)?;
    writeln!(out, "Weakness (using a public method): {}", hero_two.get_weakness())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn power_line(hero: &dyn Hero) -> String {
        let mut buf = Vec::new();
        hero.use_superpower(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn flying_hero_overrides_power_use() {
        let base = Superhero::new("Swiftwind", "Super Speed", "Extreme Cold");
        let flyer = FlyingSuperhero::new("Swiftwind", "Super Speed", "Extreme Cold", 800);
        assert_eq!(power_line(&base), "Swiftwind is using their power: Super Speed!\n");
        assert_eq!(
            power_line(&flyer),
            "Swiftwind is taking flight! Their superpower is Super Speed!\n"
        );
    }

    #[test]
    fn weakness_comes_back_unchanged() {
        let base = Superhero::new("Captain Courage", "Enhanced Strength", "Magic");
        let flyer = FlyingSuperhero::new("Swiftwind", "Super Speed", "Extreme Cold", 800);
        assert_eq!(base.get_weakness(), "Magic");
        assert_eq!(Hero::get_weakness(&flyer), "Extreme Cold");
    }

    #[test]
    fn fly_reports_speed() {
        let flyer = FlyingSuperhero::new("Swiftwind", "Super Speed", "Extreme Cold", 800);
        let mut buf = Vec::new();
        flyer.fly(&mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Swiftwind"));
        assert!(out.contains("800"));
    }

    #[test]
    fn flying_hero_keeps_base_fields() {
        let flyer = FlyingSuperhero::new("Swiftwind", "Super Speed", "Extreme Cold", 800);
        assert_eq!(flyer.name(), "Swiftwind");
        assert_eq!(flyer.superpower(), "Super Speed");
        assert_eq!(flyer.profile().name, "Swiftwind");
    }
}
