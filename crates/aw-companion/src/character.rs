//! The dual-system character facade.
//!
//! A [`DualSystemCharacter`] holds a native record and a standard block
//! side by side, plus the transient combat state both systems share.
//! Callers ask it for ability scores, proficiency, armor class and skill
//! modifiers without knowing which system is authoritative; the answer
//! comes from whichever system is active at query time.

use aw_mechanics::stats::{self, armor};
use aw_mechanics::{
    Ability, Armor, ArmorCategory, ConcentrationEffect, ConcentrationSave, ConcentrationState,
    DamageOutcome, DeathSaveState, DeathSaveTracker, DieRoller, LifeCondition, NativeAbilities,
    SavingThrowProficiency, Skill, SkillProficiency, SpellLedger, SpellLevel, SpellSlotState,
    SpellcastingClass, StandardCharacter, to_native, to_standard,
};
use tracing::debug;

use crate::config::CompanionConfig;
use crate::error::CompanionResult;
use crate::native::NativeCharacter;
use crate::status::{CharacterStatus, DeathSaveSummary, HitPointReadout, SpellSlotStatus};
use crate::system::RulesSystem;

/// Skills both systems know by the same name.
pub const SHARED_SKILLS: [Skill; 9] = [
    Skill::Athletics,
    Skill::Acrobatics,
    Skill::Stealth,
    Skill::Perception,
    Skill::Investigation,
    Skill::Insight,
    Skill::Intimidation,
    Skill::Persuasion,
    Skill::Deception,
];

/// Map a native skill name onto the standard skill of the same name.
///
/// Only the nine shared skills map; everything else is `None`.
pub fn shared_skill(name: &str) -> Option<Skill> {
    Skill::parse(name).filter(|skill| SHARED_SKILLS.contains(skill))
}

/// A character readable under either rule system.
///
/// Both systems share one level. The spell ledger and death-save tracker
/// are opaque collaborators: the facade builds them through their
/// factories and reads them, but never mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct DualSystemCharacter<L = SpellSlotState, D = DeathSaveState> {
    native: NativeCharacter,
    standard: StandardCharacter,
    active_system: RulesSystem,
    concentration: ConcentrationState,
    spell_slots: L,
    death_saves: D,
    spellcasting: SpellcastingClass,
}

impl DualSystemCharacter {
    /// Build a character from a native record with the default config.
    pub fn initialize(native: NativeCharacter, system: RulesSystem) -> Self {
        Self::from_config(native, &CompanionConfig::default().with_system(system))
    }

    /// Build a character from a native record and an explicit config.
    pub fn from_config(native: NativeCharacter, config: &CompanionConfig) -> Self {
        Self::initialize_with(native, config)
    }
}

impl<L: SpellLedger, D: DeathSaveTracker> DualSystemCharacter<L, D> {
    /// Build a character with caller-chosen collaborator types.
    ///
    /// The standard block starts with no skill or saving-throw
    /// proficiencies; those need an explicit mapping step
    /// ([`with_skill_proficiency`](Self::with_skill_proficiency)).
    pub fn initialize_with(mut native: NativeCharacter, config: &CompanionConfig) -> Self {
        if native.level == 0 {
            native.level = 1;
        }
        let class = native
            .job
            .clone()
            .filter(|job| !job.is_empty())
            .unwrap_or_else(|| config.default_class.clone());
        let standard =
            StandardCharacter::new(native.level, to_standard(&native.abilities), class)
                .with_subclass(native.path.clone())
                .with_race(config.default_race.clone())
                .with_background(config.default_background.clone());
        let spell_slots = L::initialize(native.level, &config.spellcasting);

        debug!(system = %config.default_system, level = native.level, "character initialized");

        Self {
            native,
            standard,
            active_system: config.default_system,
            concentration: ConcentrationState::new(),
            spell_slots,
            death_saves: D::initialize(),
            spellcasting: config.spellcasting.clone(),
        }
    }

    /// The system currently answering queries.
    pub fn active_system(&self) -> RulesSystem {
        self.active_system
    }

    /// The native record.
    pub fn native(&self) -> &NativeCharacter {
        &self.native
    }

    /// The standard block.
    pub fn standard(&self) -> &StandardCharacter {
        &self.standard
    }

    /// Concentration state.
    pub fn concentration(&self) -> &ConcentrationState {
        &self.concentration
    }

    /// Spell ledger.
    pub fn spell_slots(&self) -> &L {
        &self.spell_slots
    }

    /// Death-save tracker.
    pub fn death_saves(&self) -> &D {
        &self.death_saves
    }

    /// The profile the spell ledger was built from.
    pub fn spellcasting(&self) -> &SpellcastingClass {
        &self.spellcasting
    }

    /// Change the active system. Nothing is recomputed; derived queries
    /// follow the new system from here on.
    pub fn switch_active_system(mut self, system: RulesSystem) -> Self {
        if self.active_system != system {
            debug!(from = %self.active_system, system = %system, "active system switched");
        }
        self.active_system = system;
        self
    }

    /// Ability scores under native labels.
    ///
    /// Hybrid reads the native record, same as native.
    pub fn current_ability_scores(&self) -> NativeAbilities {
        match self.active_system {
            RulesSystem::Native | RulesSystem::Hybrid => self.native.abilities,
            RulesSystem::Standard => to_native(&self.standard.abilities),
        }
    }

    /// Proficiency bonus under the active system.
    ///
    /// Native and hybrid recompute from the native level; standard returns
    /// the stored bonus, which can differ if it was overridden.
    pub fn current_proficiency_bonus(&self) -> i32 {
        match self.active_system {
            RulesSystem::Native | RulesSystem::Hybrid => {
                stats::proficiency_bonus(self.native.level)
            }
            RulesSystem::Standard => self.standard.proficiency_bonus(),
        }
    }

    /// Shared level, read from the native record.
    pub fn current_level(&self) -> u32 {
        self.native.level
    }

    /// Armor class under the active system.
    ///
    /// Only standard uses armor categories. Native and hybrid use
    /// `10 + AGI modifier`, plus 2 for a shield.
    pub fn unified_armor_class(&self, category: ArmorCategory, shield: bool) -> i32 {
        match self.active_system {
            RulesSystem::Standard => {
                armor::armor_class(&self.standard, &Armor::new(category).with_shield(shield))
            }
            RulesSystem::Native | RulesSystem::Hybrid => self.native_armor_class(shield),
        }
    }

    fn native_armor_class(&self, shield: bool) -> i32 {
        let agility = stats::ability_modifier(self.native.abilities.agility);
        let shield_bonus = if shield { armor::SHIELD_BONUS } else { 0 };
        armor::BASE_ARMOR_CLASS + agility + shield_bonus
    }

    /// Skill modifier under the active system.
    ///
    /// Standard resolves shared skill names through the full calculator and
    /// falls back to the native path for anything else. Native and hybrid
    /// return the AGI modifier whatever the skill.
    pub fn unified_skill_modifier(&self, skill: &str) -> i32 {
        match self.active_system {
            RulesSystem::Standard => match shared_skill(skill) {
                Some(skill) => stats::skill_modifier(&self.standard, skill),
                None => self.native_skill_modifier(),
            },
            RulesSystem::Native | RulesSystem::Hybrid => self.native_skill_modifier(),
        }
    }

    fn native_skill_modifier(&self) -> i32 {
        stats::ability_modifier(self.native.abilities.agility)
    }

    /// Change the shared level.
    ///
    /// Keeps the standard proficiency bonus in step and rebuilds the spell
    /// ledger from the stored spellcasting profile, which clears slot usage.
    pub fn set_level(mut self, level: u32) -> Self {
        let level = level.max(1);
        self.native.level = level;
        self.standard.set_level(level);
        self.spell_slots = L::initialize(level, &self.spellcasting);
        debug!(level, "level changed");
        self
    }

    /// Record a skill proficiency on the standard block.
    ///
    /// The flags are stored as given: expertise without proficiency adds
    /// the bonus once.
    pub fn with_skill_proficiency(
        mut self,
        skill: &str,
        proficient: bool,
        expertise: bool,
    ) -> CompanionResult<Self> {
        let skill: Skill = skill.parse()?;
        self.standard.add_skill_proficiency(SkillProficiency {
            skill,
            proficient,
            expertise,
            bonus: 0,
        });
        Ok(self)
    }

    /// Record a saving-throw proficiency on the standard block.
    pub fn with_saving_throw_proficiency(mut self, ability: &str) -> CompanionResult<Self> {
        let ability: Ability = ability.parse()?;
        self.standard
            .add_saving_throw_proficiency(SavingThrowProficiency::proficient(ability));
        Ok(self)
    }

    /// Replace the concentration state.
    pub fn with_concentration(mut self, concentration: ConcentrationState) -> Self {
        self.concentration = concentration;
        self
    }

    /// Replace the spell ledger.
    pub fn with_spell_slots(mut self, spell_slots: L) -> Self {
        self.spell_slots = spell_slots;
        self
    }

    /// Replace the death-save tracker.
    pub fn with_death_saves(mut self, death_saves: D) -> Self {
        self.death_saves = death_saves;
        self
    }

    /// Begin concentrating on an effect, dropping any current one.
    pub fn concentrate(mut self, effect: ConcentrationEffect) -> Self {
        self.concentration = std::mem::take(&mut self.concentration).start(effect);
        self
    }

    /// Advance concentration by one round.
    pub fn maintain_concentration(mut self) -> Self {
        self.concentration = std::mem::take(&mut self.concentration).maintain();
        self
    }

    /// Apply damage to concentration.
    pub fn take_damage(mut self, amount: i32) -> (Self, DamageOutcome) {
        let check = std::mem::take(&mut self.concentration).take_damage(amount);
        self.concentration = check.state;
        (self, check.outcome)
    }

    /// Roll a concentration save with the standard Constitution save
    /// modifier.
    pub fn concentration_save(
        mut self,
        dc: i32,
        roller: &mut impl DieRoller,
    ) -> (Self, ConcentrationSave) {
        let modifier = stats::saving_throw_modifier(&self.standard, Ability::Constitution);
        let save = std::mem::take(&mut self.concentration).make_save(modifier, dc, roller);
        self.concentration = save.state.clone();
        (self, save)
    }

    /// Stop concentrating.
    pub fn end_concentration(mut self) -> Self {
        self.concentration = std::mem::take(&mut self.concentration).end();
        self
    }

    /// Aggregate read model for display.
    ///
    /// Armor class assumes no armor and no shield. Hit points are not
    /// derived here.
    pub fn status(&self) -> CharacterStatus {
        let condition = if self.death_saves.is_dead() {
            LifeCondition::Dead
        } else if self.death_saves.is_stable() {
            LifeCondition::Stable
        } else {
            LifeCondition::Dying
        };

        CharacterStatus {
            system: self.active_system,
            level: self.current_level(),
            hit_points: HitPointReadout::NotWired,
            armor_class: self.unified_armor_class(ArmorCategory::None, false),
            concentration: self.concentration.status(),
            spell_slots: SpellLevel::ALL
                .into_iter()
                .map(|level| SpellSlotStatus {
                    level,
                    count: self.spell_slots.slot(level),
                })
                .collect(),
            death_saves: DeathSaveSummary {
                condition,
                successes: self.death_saves.successes(),
                failures: self.death_saves.failures(),
            },
        }
    }
}
