//! Validation for cross-references between content definitions.

use super::registry::ContentRegistry;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}': {}",
            self.source_type, self.source_id, self.message
        )
    }
}

/// Validate all cross-references and value ranges in the registry.
/// Returns a list of validation errors, empty if everything checks out.
pub fn validate_content(registry: &ContentRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (id, spell) in &registry.spells {
        if spell.active_time < 0.0 || spell.cooldown_time < 0.0 {
            errors.push(ValidationError {
                source_type: "Spell",
                source_id: id.clone(),
                message: "active_time and cooldown_time must be non-negative".to_string(),
            });
        }
        if spell.charge_vfx.is_empty() || spell.impact_vfx.is_empty() {
            errors.push(ValidationError {
                source_type: "Spell",
                source_id: id.clone(),
                message: "charge_vfx and impact_vfx handles must be set".to_string(),
            });
        }
    }

    for (id, caster) in &registry.casters {
        if caster.spell_ids.len() > crate::spells::MAX_SPELL_SLOTS {
            errors.push(ValidationError {
                source_type: "Caster",
                source_id: id.clone(),
                message: format!(
                    "equips {} spells, max is {}",
                    caster.spell_ids.len(),
                    crate::spells::MAX_SPELL_SLOTS
                ),
            });
        }
        for spell_id in &caster.spell_ids {
            if !registry.spells.contains_key(spell_id) {
                errors.push(ValidationError {
                    source_type: "Caster",
                    source_id: id.clone(),
                    message: format!("references missing Spell '{}'", spell_id),
                });
            }
        }
        let loco = &caster.locomotion;
        if loco.gravity >= 0.0 {
            errors.push(ValidationError {
                source_type: "Caster",
                source_id: id.clone(),
                message: "gravity must be negative".to_string(),
            });
        }
        if loco.jump_height <= 0.0 || loco.grounded_radius <= 0.0 {
            errors.push(ValidationError {
                source_type: "Caster",
                source_id: id.clone(),
                message: "jump_height and grounded_radius must be positive".to_string(),
            });
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::data::*;

    fn sample_spell(id: &str) -> SpellDef {
        SpellDef {
            id: id.to_string(),
            name: "Test".to_string(),
            class: SpellClass::Buff,
            kind: SpellKindDef::Dash {
                speed_multiplier: 2.0,
            },
            active_time: 1.0,
            cooldown_time: 2.0,
            charge_vfx: "vfx_charge".to_string(),
            impact_vfx: "vfx_impact".to_string(),
        }
    }

    fn sample_caster(id: &str, spell_ids: Vec<String>) -> CasterDef {
        CasterDef {
            id: id.to_string(),
            name: "Test".to_string(),
            spell_ids,
            locomotion: LocomotionDef {
                base_speed: 2.7,
                walk_speed: 1.6,
                sprint_speed: 5.0,
                aim_speed: 2.4,
                rotation_smooth_time: 0.12,
                speed_change_rate: 10.0,
                jump_height: 1.2,
                gravity: -15.0,
                jump_timeout: 0.5,
                fall_timeout: 0.15,
                grounded_offset: -0.14,
                grounded_radius: 0.28,
                top_clamp: 70.0,
                bottom_clamp: -30.0,
                normal_sensitivity: 1.0,
                aim_sensitivity: 0.5,
            },
            cast_origin: [0.0, 1.2, 0.4],
            spawn: [0.0, 0.0, 0.0],
            eye_height: 1.6,
        }
    }

    #[test]
    fn test_valid_content_passes() {
        let mut registry = ContentRegistry::default();
        registry
            .spells
            .insert("spell_dash".to_string(), sample_spell("spell_dash"));
        registry.casters.insert(
            "caster_a".to_string(),
            sample_caster("caster_a", vec!["spell_dash".to_string()]),
        );

        assert!(validate_content(&registry).is_empty());
    }

    #[test]
    fn test_missing_spell_reference_reported() {
        let mut registry = ContentRegistry::default();
        registry.casters.insert(
            "caster_a".to_string(),
            sample_caster("caster_a", vec!["spell_missing".to_string()]),
        );

        let errors = validate_content(&registry);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("spell_missing"));
    }

    #[test]
    fn test_too_many_slots_reported() {
        let mut registry = ContentRegistry::default();
        let ids: Vec<String> = (0..5).map(|i| format!("spell_{}", i)).collect();
        for id in &ids {
            registry.spells.insert(id.clone(), sample_spell(id));
        }
        registry
            .casters
            .insert("caster_a".to_string(), sample_caster("caster_a", ids));

        let errors = validate_content(&registry);
        assert!(errors.iter().any(|e| e.to_string().contains("max is")));
    }
}
