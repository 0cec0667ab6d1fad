// src/onboarding.rs

use crate::config::AppConfig;
use crate::error::ValidationError;
use crate::model::{AgeGroup, Avatar, Profile};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnboardingStep {
    #[default]
    AgeGroup,
    Details,
}

/// Valida nombre y edad tal como llegan de los campos de texto.
/// Lo usan tanto el onboarding como Ajustes.
pub fn validate_details(
    name: &str,
    age_input: &str,
    config: &AppConfig,
) -> Result<(String, u32), ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    let age_input = age_input.trim();
    if age_input.is_empty() {
        return Err(ValidationError::MissingAge);
    }
    let age: u32 = age_input.parse().map_err(|_| ValidationError::InvalidAge)?;
    if !(config.min_age..=config.max_age).contains(&age) {
        return Err(ValidationError::AgeOutOfRange {
            min: config.min_age,
            max: config.max_age,
        });
    }
    Ok((name.to_owned(), age))
}

/// Asistente de dos pasos: grupo de edad y luego datos del perfil
#[derive(Debug, Clone)]
pub struct Onboarding {
    pub step: OnboardingStep,
    pub age_group: Option<AgeGroup>,
    pub name: String,
    pub age: String,
    pub avatar: Avatar,
}

impl Onboarding {
    pub fn new(default_avatar: Avatar) -> Self {
        Self {
            step: OnboardingStep::AgeGroup,
            age_group: None,
            name: String::new(),
            age: String::new(),
            avatar: default_avatar,
        }
    }

    pub fn select_age_group(&mut self, group: AgeGroup) {
        self.age_group = Some(group);
        self.step = OnboardingStep::Details;
    }

    /// Para resaltar la opción ya elegida al volver al paso 1
    pub fn is_selected(&self, group: AgeGroup) -> bool {
        self.age_group == Some(group)
    }

    /// Volver al paso 1 no borra nada
    pub fn back(&mut self) {
        self.step = OnboardingStep::AgeGroup;
    }

    /// Equivale al botón deshabilitado de la UI
    pub fn can_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.age.trim().is_empty()
    }

    pub fn complete(&self, config: &AppConfig, now: DateTime<Utc>) -> Result<Profile, ValidationError> {
        let age_group = self.age_group.ok_or(ValidationError::MissingAgeGroup)?;
        let (name, age) = validate_details(&self.name, &self.age, config)?;
        Ok(Profile::new(name, age, age_group, self.avatar.clone(), now))
    }
}
