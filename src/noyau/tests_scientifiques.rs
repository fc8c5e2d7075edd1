//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : vérifier les propriétés observables du noyau flottant :
//! - précédence conventionnelle, associativité à droite de '^'
//! - fonctions (radians, log base 10, ln naturel, sqrt)
//! - factorielle bornée (0..=170, entiers seulement)
//! - moins unaire via parenthèses
//! - classification des erreurs (division par zéro, non fini, parenthèses)

use super::erreurs::ErreurCalc;
use super::eval::evaluer;

const TOLERANCE: f64 = 1e-9;

fn eval_ok(expr: &str) -> f64 {
    evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() < TOLERANCE,
        "expr={expr:?} attendu={attendu} obtenu={v}"
    );
}

fn assert_erreur(expr: &str, attendue: ErreurCalc) {
    assert_eq!(evaluer(expr), Err(attendue), "expr={expr:?}");
}

/* ------------------------ Précédence / associativité ------------------------ */

#[test]
fn sci_precedence_conventionnelle() {
    assert_proche("2+3*4", 14.0);
    assert_proche("(2+3)*4", 20.0);
    assert_proche("2*3^2", 18.0);
    assert_proche("10-2-3", 5.0); // gauche
    assert_proche("8/4/2", 1.0); // gauche
}

#[test]
fn sci_puissance_droite() {
    assert_proche("2^3^2", 512.0);
    assert_proche("4^0.5", 2.0);
    assert_proche("2^(-2)", 0.25);
}

/* ------------------------ Fonctions scientifiques ------------------------ */

#[test]
fn sci_trig_radians() {
    assert_proche("sin(0)", 0.0);
    assert_proche("cos(0)", 1.0);
    assert_proche("sin(π/2)", 1.0);
    assert_proche("sin(π/6)", 0.5);
    assert_proche("tan(π/4)", 1.0);
}

#[test]
fn sci_log_et_ln() {
    assert_proche("log(100)", 2.0);
    assert_proche("log(1000)", 3.0);
    assert_proche("ln(e)", 1.0);
    assert_proche("ln(e^2)", 2.0);
    assert_proche("ln(1)", 0.0);
}

#[test]
fn sci_sqrt_et_composition() {
    assert_proche("sqrt(16)", 4.0);
    assert_proche("sqrt(2)^2", 2.0);
    assert_proche("sqrt(sqrt(16))", 2.0);
    assert_proche("2*sqrt(9)+1", 7.0);
}

/* ------------------------ Factorielle ------------------------ */

#[test]
fn sci_factorielle_valeurs() {
    assert_proche("0!", 1.0);
    assert_proche("1!", 1.0);
    assert_proche("5!", 120.0);
    assert_proche("10!", 3628800.0);
    // double application : (3!)! = 720
    assert_proche("3!!", 720.0);
    // '!' plus prioritaire que les binaires
    assert_proche("3!+1", 7.0);
    assert_proche("2*3!", 12.0);
}

#[test]
fn sci_factorielle_bornes() {
    // 170! est la dernière valeur finie en f64
    let grand = eval_ok("170!");
    assert!(grand.is_finite());

    assert_erreur("171!", ErreurCalc::FactorielleInvalide);
    assert_erreur("(-1)!", ErreurCalc::FactorielleInvalide);
    assert_erreur("2.5!", ErreurCalc::FactorielleInvalide);
}

/* ------------------------ Moins unaire ------------------------ */

#[test]
fn sci_moins_unaire() {
    assert_proche("-5", -5.0);
    assert_proche("-5+3", -2.0);
    assert_proche("-(2+3)", -5.0);
    assert_proche("2*(-3)", -6.0);
    assert_proche("sin(-π/2)", -1.0);
}

#[test]
fn sci_moins_unaire_apres_operateur() {
    // '-' collé derrière un opérateur binaire, sans parenthèses
    assert_proche("2*-3", -6.0);
    assert_proche("2--3", 5.0);
    assert_proche("2^-3", 0.125);
    assert_proche("2/-4", -0.5);
    assert_proche("--3", 3.0);
}

/* ------------------------ Erreurs classées ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_erreur("5/0", ErreurCalc::DivisionParZero);
    assert_erreur("5/(2-2)", ErreurCalc::DivisionParZero);
    assert_proche("1/0.5", 2.0);
}

#[test]
fn sci_resultats_non_finis() {
    assert_erreur("sqrt(-4)", ErreurCalc::ResultatNonFini);
    assert_erreur("ln(-1)", ErreurCalc::ResultatNonFini);
    assert_erreur("log(0)", ErreurCalc::ResultatNonFini);
    assert_erreur("0^(-1)", ErreurCalc::ResultatNonFini);
}

#[test]
fn sci_parentheses() {
    assert_proche("((2+3)*(4-1))", 15.0);
    assert_erreur("(2+3", ErreurCalc::ParenthesesNonAppariees);
    assert_erreur("2+3)", ErreurCalc::ParenthesesNonAppariees);
}

#[test]
fn sci_lexique() {
    assert_erreur("1 × 2", ErreurCalc::CaractereInattendu('×'));
    assert_erreur("1.2.3", ErreurCalc::NombreMalForme("1.2.3".into()));
    assert_erreur("abs(1)", ErreurCalc::FonctionInconnue("abs".into()));
    assert_erreur("x+1", ErreurCalc::FonctionInconnue("x".into()));
}

/* ------------------------ Constantes ------------------------ */

#[test]
fn sci_constantes() {
    assert_proche("π", std::f64::consts::PI);
    assert_proche("pi", std::f64::consts::PI);
    assert_proche("e", std::f64::consts::E);
    assert_proche("2*π", 2.0 * std::f64::consts::PI);
}
