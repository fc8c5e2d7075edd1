//! Noyau — évaluation (pipeline complet)
//!
//! tokenize -> RPN (shunting-yard) -> éval sur pile f64 -> garde "fini"
//!
//! Chaque appel est indépendant : aucune structure ne survit au retour,
//! aucun état ambiant. Une erreur d'étape court-circuite le reste.

use super::erreurs::ErreurCalc;
use super::jetons::{format_jetons, tokenize};
use super::rpn::{eval_rpn, vers_rpn};

/// Démarche (panneau d'explication) : jetons + RPN en texte.
#[derive(Default, Clone, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression canonique (ASCII) et retourne un
/// f64 fini, ou une erreur classée.
///
/// Un résultat NaN / ±∞ (ex: ln(-1), 0^(-1)) est une erreur à part
/// entière (ResultatNonFini), même si aucune étape n'a signalé de faute.
pub fn evaluer(expr: &str) -> Result<f64, ErreurCalc> {
    let (v, _d) = evaluer_avec_demarche(expr)?;
    Ok(v)
}

/// Variante avec démarche, pour l'UI.
pub fn evaluer_avec_demarche(expr: &str) -> Result<(f64, Demarche), ErreurCalc> {
    // 1) Jetons
    let jetons = tokenize(expr.trim())?;
    let jetons_txt = format_jetons(&jetons);

    // 2) RPN
    let rpn = vers_rpn(&jetons)?;
    let rpn_txt = format_jetons(&rpn);

    // 3) Évaluation
    let v = eval_rpn(&rpn)?;

    // 4) Garde finale : résultat fini exigé
    if !v.is_finite() {
        return Err(ErreurCalc::ResultatNonFini);
    }

    Ok((
        v,
        Demarche {
            jetons: jetons_txt,
            rpn: rpn_txt,
        },
    ))
}
