//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte certaines erreurs attendues (division par zéro, résultat
//!   non fini, factorielle hors domaine)
//! - invariant clé : jamais de panique, et deux évaluations de la même
//!   chaîne donnent exactement le même résultat

use std::time::{Duration, Instant};

use super::erreurs::ErreurCalc;
use super::eval::evaluer;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn est_erreur_attendue(e: &ErreurCalc) -> bool {
    // Liste blanche : erreurs *normales* pour des expressions générées
    // bien formées (domaines flottants seulement).
    matches!(
        e,
        ErreurCalc::DivisionParZero
            | ErreurCalc::ResultatNonFini
            | ErreurCalc::FactorielleInvalide
    )
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // petits flottants, incluant 0 (utile pour tester les zéros)
    match rng.pick(8) {
        0 => "0".to_string(),
        1 => "1".to_string(),
        2 => "2".to_string(),
        3 => "3".to_string(),
        4 => "0.5".to_string(),
        5 => "2.5".to_string(),
        6 => "10".to_string(),
        _ => "7".to_string(),
    }
}

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(5) {
        0 | 1 => gen_nombre(rng),
        2 => "π".to_string(),
        3 => "e".to_string(),
        _ => format!("(-{})", gen_nombre(rng)),
    }
}

fn gen_expr(rng: &mut Rng, profondeur: usize) -> String {
    if profondeur == 0 {
        return gen_atome(rng);
    }

    match rng.pick(10) {
        0 => gen_atome(rng),
        1 => format!(
            "({}+{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        2 => format!(
            "({}-{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        3 => format!(
            "({}*{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        4 => format!(
            "({}/{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        5 => format!("({}^{})", gen_nombre(rng), gen_nombre(rng)),
        6 => format!("sin({})", gen_expr(rng, profondeur - 1)),
        7 => format!("cos({})", gen_expr(rng, profondeur - 1)),
        8 => format!("sqrt({})", gen_expr(rng, profondeur - 1)),
        _ => {
            // factorielle sur petit entier (parfois hors domaine, c'est voulu)
            if rng.coin() {
                format!("({})!", gen_nombre(rng))
            } else {
                format!("ln({})", gen_expr(rng, profondeur - 1))
            }
        }
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_jamais_de_panique_et_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        let premier = evaluer(&expr);
        let second = evaluer(&expr);
        assert_eq!(premier, second, "évaluation non déterministe: {expr:?}");

        match premier {
            Ok(v) => {
                assert!(v.is_finite(), "Ok non fini: expr={expr:?} v={v}");
                vus_ok += 1;
            }
            Err(e) => {
                assert!(
                    est_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                vus_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne balaye rien.
    assert!(vus_ok > 20, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 0, "aucune erreur vue: fuzz trop sage");
}

#[test]
fn fuzz_safe_entrees_brutes_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // Chaînes volontairement cassées : le noyau doit répondre par une
    // erreur classée, jamais par une panique.
    let cassees = [
        "", "   ", "(", ")", "((((", "++", "1+", "*1", "1..2", ".", "!",
        "sin", "sin()", "foo(1)", "1 2", "^^", "π(", "5/0", "e!", "-",
    ];

    for s in cassees {
        budget(t0, max);
        let _ = evaluer(s); // Ok ou Err, mais pas de panique
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("0.5", 800);
    budget(t0, max);

    let v = evaluer(&expr).unwrap_or_else(|e| panic!("err: {e}"));

    // 800 * 0.5 = 400
    assert!((v - 400.0).abs() < 1e-9);
}
