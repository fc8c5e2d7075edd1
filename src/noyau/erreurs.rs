// src/noyau/erreurs.rs
//
// Erreur unique du noyau.
// Chaque étape (jetons -> RPN -> éval) produit ses propres variantes;
// l'appelant peut matcher le discriminant ou afficher le message.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurCalc {
    // --- tokenisation ---
    #[error("caractère inattendu : '{0}'")]
    CaractereInattendu(char),

    #[error("fonction inconnue : {0}")]
    FonctionInconnue(String),

    #[error("nombre mal formé : {0}")]
    NombreMalForme(String),

    // --- conversion RPN ---
    #[error("parenthèses non appariées")]
    ParenthesesNonAppariees,

    // --- évaluation ---
    #[error("opérandes manquantes")]
    OperandesManquantes,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("factorielle invalide (entier de 0 à 170 attendu)")]
    FactorielleInvalide,

    #[error("expression mal formée")]
    ExpressionMalFormee,

    #[error("résultat non fini")]
    ResultatNonFini,
}

impl ErreurCalc {
    /// Message complet pour l'affichage UI ("Erreur de calcul : <cause>").
    pub fn message_complet(&self) -> String {
        format!("Erreur de calcul : {self}")
    }
}
