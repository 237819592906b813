//! Text rendering of roster entries

use std::fmt;

use poketeam_coverage::Type;

use crate::roster::RosterEntry;

/// A labelled type chip: `[Fire]` or `[Fire 2x]`.
///
/// No multiplier is shown when there is none, or when it is zero: the
/// "No Effect" row already says so.
pub fn type_chip(ty: Type, multiplier: Option<f32>) -> String {
    match multiplier {
        Some(m) if m != 0.0 => format!("[{} {}x]", ty, m),
        _ => format!("[{}]", ty),
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One Pokemon as a text card
pub struct Card<'a>(pub &'a RosterEntry);

impl fmt::Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let RosterEntry {
            pokemon,
            types,
            coverage,
        } = self.0;

        writeln!(f, "#{} {}", pokemon.id, capitalize(&pokemon.name))?;
        if let Some(url) = pokemon.sprite_url() {
            writeln!(f, "  Sprite: {}", url)?;
        }

        let mut abilities: Vec<_> = pokemon.abilities.iter().collect();
        abilities.sort_by_key(|a| a.slot);
        if !abilities.is_empty() {
            let list: Vec<String> = abilities
                .iter()
                .map(|a| {
                    if a.is_hidden {
                        format!("{} (Hidden)", a.ability.name)
                    } else {
                        a.ability.name.clone()
                    }
                })
                .collect();
            writeln!(f, "  Abilities: {}", list.join(", "))?;
        }

        let chips: Vec<String> = types.iter().map(|t| type_chip(t, None)).collect();
        writeln!(f, "  Types: {}", chips.join(" "))?;

        for (bucket, entries) in coverage.iter_buckets() {
            if entries.is_empty() {
                continue;
            }
            let chips: Vec<String> = entries
                .iter()
                .map(|e| type_chip(e.ty, Some(e.multiplier)))
                .collect();
            writeln!(f, "  {}: {}", bucket.label(), chips.join(" "))?;
        }

        Ok(())
    }
}

/// Render one entry as a [`Card`]
pub fn render_card(entry: &RosterEntry) -> String {
    Card(entry).to_string()
}

/// Every card in the roster, separated by blank lines
pub fn render_roster<'a>(entries: impl IntoIterator<Item = &'a RosterEntry>) -> String {
    entries
        .into_iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}
