//! Noyau flottant de la calculatrice scientifique
//!
//! Organisation interne :
//! - erreurs.rs : erreur classée (discriminant + message)
//! - jetons.rs  : tokenisation (nombres, opérateurs, fonctions, constantes)
//! - rpn.rs     : shunting-yard + évaluation sur pile f64
//! - eval.rs    : pipeline complet + démarche
//! - format.rs  : affichage du résultat

pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::ErreurCalc;
pub use eval::{evaluer, evaluer_avec_demarche, Demarche};
pub use format::format_nombre;
