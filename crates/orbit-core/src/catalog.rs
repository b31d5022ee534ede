use crate::constants::{LARGE_BADGE_PX, MEDIUM_BADGE_PX, SMALL_BADGE_PX};
use crate::error::EngineError;
use crate::rings;
use fnv::FnvHashMap;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Large,
    Medium,
    Small,
}

impl SizeClass {
    /// Badge size in CSS pixels as `(base, hovered)`.
    pub fn badge_px(self) -> (f32, f32) {
        match self {
            SizeClass::Large => LARGE_BADGE_PX,
            SizeClass::Medium => MEDIUM_BADGE_PX,
            SizeClass::Small => SMALL_BADGE_PX,
        }
    }

    /// Scale multiplier applied while the badge is hovered.
    pub fn hover_ratio(self) -> f32 {
        let (base, hover) = self.badge_px();
        hover / base
    }
}

impl FromStr for SizeClass {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "large" | "lg" => Ok(SizeClass::Large),
            "medium" | "md" => Ok(SizeClass::Medium),
            "small" | "sm" => Ok(SizeClass::Small),
            _ => Err(EngineError::UnknownSizeClass(s.to_string())),
        }
    }
}

/// Catalog record as supplied by the page-composition layer.
#[derive(Clone, Debug, PartialEq)]
pub struct EntitySpec {
    pub id: String,
    pub label: String,
    pub color_hex: String,
    pub layer: String,
    pub size: SizeClass,
}

impl EntitySpec {
    pub fn new(id: &str, label: &str, color_hex: &str, layer: &str, size: SizeClass) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            color_hex: color_hex.to_string(),
            layer: layer.to_string(),
            size,
        }
    }
}

/// A validated catalog entry. `offset` is assigned once when the catalog is
/// built (see [`rings::assign_offsets`]) and never recomputed.
#[derive(Clone, Debug)]
pub struct Entity {
    pub id: String,
    pub label: String,
    pub color_rgb: [f32; 3],
    pub layer: String,
    pub size: SizeClass,
    /// Position in the catalog.
    pub index: usize,
    /// Position within the entity's layer.
    pub layer_index: usize,
    pub offset: f32,
}

/// Validated, ordered entity set with id lookup.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entities: Vec<Entity>,
    by_id: FnvHashMap<String, usize>,
}

impl Catalog {
    /// Validate the raw records and assign every entity its layer slot and
    /// angular offset. Catalog order is preserved.
    pub fn from_specs(specs: &[EntitySpec]) -> Result<Self, EngineError> {
        let mut entities = Vec::with_capacity(specs.len());
        let mut by_id = FnvHashMap::default();
        for (index, spec) in specs.iter().enumerate() {
            let id = spec.id.trim();
            if id.is_empty() {
                return Err(EngineError::EmptyId { index });
            }
            if by_id.insert(id.to_string(), index).is_some() {
                return Err(EngineError::DuplicateId { id: id.to_string() });
            }
            let layer = spec.layer.trim();
            if layer.is_empty() {
                return Err(EngineError::MissingLayer { id: id.to_string() });
            }
            let color_rgb =
                parse_color_hex(&spec.color_hex).ok_or_else(|| EngineError::InvalidColor {
                    id: id.to_string(),
                    value: spec.color_hex.clone(),
                })?;
            entities.push(Entity {
                id: id.to_string(),
                label: spec.label.clone(),
                color_rgb,
                layer: layer.to_string(),
                size: spec.size,
                index,
                layer_index: 0,
                offset: 0.0,
            });
        }
        rings::assign_offsets(&mut entities);
        Ok(Self { entities, by_id })
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.index_of(id).map(|i| &self.entities[i])
    }

    /// One row per layer tag in order of first appearance, colored like the
    /// layer's first member.
    pub fn legend(&self) -> Vec<LayerLegend> {
        let mut rows: Vec<LayerLegend> = Vec::new();
        for e in &self.entities {
            match rows.iter_mut().find(|r| r.id == e.layer) {
                Some(row) => row.members += 1,
                None => rows.push(LayerLegend {
                    id: e.layer.clone(),
                    color_rgb: e.color_rgb,
                    members: 1,
                }),
            }
        }
        rows
    }
}

/// Legend row for one layer tag.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerLegend {
    pub id: String,
    pub color_rgb: [f32; 3],
    pub members: usize,
}

/// Parse `#RRGGBB` (leading `#` optional) into 0..1 RGB.
pub fn parse_color_hex(value: &str) -> Option<[f32; 3]> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([
        channel(0)? as f32 / 255.0,
        channel(2)? as f32 / 255.0,
        channel(4)? as f32 / 255.0,
    ])
}

/// The technology catalog shown by the portfolio reactor, grouped into the
/// three default rings.
pub fn reference_catalog() -> Vec<EntitySpec> {
    use SizeClass::*;
    let rows: [(&str, &str, &str, SizeClass); 30] = [
        // Inner orbit - primary stack
        ("React", "#61DAFB", "inner", Large),
        ("Next.js", "#000000", "inner", Large),
        ("TypeScript", "#3178C6", "inner", Large),
        ("Node.js", "#339933", "inner", Large),
        ("PostgreSQL", "#4169E1", "inner", Large),
        ("MongoDB", "#47A248", "inner", Medium),
        // Middle orbit - frameworks and tools
        ("Tailwind CSS", "#06B6D4", "middle", Medium),
        ("Redux", "#764ABC", "middle", Medium),
        ("Express.js", "#000000", "middle", Medium),
        ("Prisma", "#2D3748", "middle", Medium),
        ("Git", "#F05032", "middle", Medium),
        ("Vercel", "#000000", "middle", Medium),
        ("Shadcn UI", "#000000", "middle", Medium),
        // Outer orbit
        ("HTML5", "#E34F26", "outer", Small),
        ("CSS3", "#1572B6", "outer", Small),
        ("JavaScript", "#F7DF1E", "outer", Small),
        ("Python", "#3776AB", "outer", Small),
        ("C++", "#00599C", "outer", Small),
        ("C", "#A8B9CC", "outer", Small),
        ("Java", "#007396", "outer", Small),
        ("Firebase", "#FFCA28", "outer", Small),
        ("Stripe", "#635BFF", "outer", Small),
        ("Figma", "#F24E1E", "outer", Small),
        ("GitHub", "#181717", "outer", Small),
        ("MUI", "#007FFF", "outer", Small),
        ("Ant Design", "#0170FE", "outer", Small),
        ("Mongoose", "#880000", "outer", Small),
        ("NextAuth.js", "#000000", "outer", Small),
        ("Appwrite", "#FD366E", "outer", Small),
        ("Netlify", "#00C7B7", "outer", Small),
    ];
    rows.iter()
        .map(|&(name, color, layer, size)| EntitySpec::new(name, name, color, layer, size))
        .collect()
}

/// Galaxy-mode catalog: skills grouped by category, every orb tinted with
/// its category color.
pub fn galaxy_catalog() -> Vec<EntitySpec> {
    let categories: [(&str, &str, &[&str]); 4] = [
        (
            "Frontend",
            "#06B6D4",
            &[
                "HTML5",
                "CSS3",
                "JavaScript",
                "TypeScript",
                "React",
                "Next.js",
                "Redux",
                "Tailwind CSS",
                "Shadcn UI",
                "MUI",
                "Ant Design",
            ],
        ),
        (
            "Backend",
            "#EC4899",
            &["Node.js", "Express.js", "MongoDB", "Mongoose", "PostgreSQL", "Prisma"],
        ),
        ("Languages", "#8B5CF6", &["Python", "C", "C++", "Java"]),
        (
            "Tools",
            "#10B981",
            &[
                "Git", "GitHub", "Figma", "Netlify", "Vercel", "Stripe", "Firebase", "NextAuth",
                "AppWrite",
            ],
        ),
    ];
    categories
        .iter()
        .flat_map(|&(category, color, skills)| {
            skills
                .iter()
                .map(move |&skill| EntitySpec::new(skill, skill, color, category, SizeClass::Medium))
        })
        .collect()
}
