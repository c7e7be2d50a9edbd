pub mod adhd;
pub mod alcohol_use;
pub mod anger;
pub mod anxiety;
pub mod binge_eating;
pub mod bipolar;
pub mod depression;
pub mod health_anxiety;
pub mod insomnia;
pub mod ocd;
pub mod ptsd;
pub mod somatic_symptom;
pub mod specific_phobia;
