// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> évaluation sur pile f64
//
// Règles:
// - Précédences : '!' = 4 (droite), '^' = 3 (droite), '*' '/' = 2 (gauche),
//   '+' '-' = 1 (gauche).
// - Les fonctions restent "collées" à leur argument : elles ne sont jamais
//   traversées par un opérateur, et sortent juste après la parenthèse
//   fermante de leur groupe.
// - Moins unaire : si '-' arrive quand on n'attend PAS une valeur, on
//   injecte 0 en sortie : "-x" => "0 x -".
// - '!' (postfixé) est empilé comme un opérateur de précédence 4; n'ayant
//   pas d'opérande droite à attendre, il ressort au prochain point de
//   vidage (parenthèse fermante, opérateur moins prioritaire, fin d'entrée).

use super::erreurs::ErreurCalc;
use super::jetons::Tok;

/// Borne factorielle : 171! déborde f64.
const FACTORIELLE_MAX: f64 = 170.0;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Moins => 1,
        Tok::Fois | Tok::Division => 2,
        Tok::Puissance => 3,
        Tok::Factorielle => 4,
        _ => 0,
    }
}

// Seul '^' est consulté ici : '!' a sa propre branche d'empilement et,
// une fois sur la pile, sa précédence (4) suffit à le faire sortir.
fn est_associatif_droite(t: &Tok) -> bool {
    matches!(t, Tok::Puissance)
}

fn est_operateur(t: &Tok) -> bool {
    matches!(
        t,
        Tok::Plus | Tok::Moins | Tok::Fois | Tok::Division | Tok::Puissance | Tok::Factorielle
    )
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Fonction(Sin), ParG, Num(π), Division, Num(2), ParD]
///   rpn:    [Num(π), Num(2), Division, Fonction(Sin)]
pub fn vers_rpn(jetons: &[Tok]) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // "valeur" = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in jetons.iter().copied() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Fonction(_) => {
                // fonction : sur la pile (elle sortira après son argument)
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::ParG => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::ParD => {
                // dépile jusqu'à '('
                let mut ouvrante_trouvee = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::ParG) {
                        ouvrante_trouvee = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante_trouvee {
                    return Err(ErreurCalc::ParenthesesNonAppariees);
                }

                // si une fonction est au sommet, elle se rattache au groupe
                if matches!(ops.last(), Some(Tok::Fonction(_))) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }

                prev_was_value = true;
            }

            Tok::Factorielle => {
                // postfixé : rien à attendre à droite, on empile tel quel
                ops.push(tok);
                prev_was_value = true;
            }

            Tok::Plus | Tok::Moins | Tok::Fois | Tok::Division | Tok::Puissance => {
                // moins unaire : injecte 0 en sortie et s'empile TEL QUEL,
                // sans vider la pile. Un opérateur en attente doit lier le
                // groupe "0 x -" entier, pas le zéro injecté ("2*-3" doit
                // donner "2 0 3 - *", jamais "2 0 * 3 -").
                if matches!(tok, Tok::Moins) && !prev_was_value {
                    out.push(Tok::Num(0.0));
                    ops.push(tok);
                    continue;
                }

                // dépile tant que:
                // - on n'est pas bloqué par '(' ni par une fonction
                // - et la précédence/associativité exige de sortir le sommet
                while let Some(top) = ops.last() {
                    if !est_operateur(top) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if est_associatif_droite(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if doit_pop {
                        if let Some(op) = ops.pop() {
                            out.push(op);
                        }
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::ParG) {
            return Err(ErreurCalc::ParenthesesNonAppariees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN sur une pile de f64.
///
/// Contrats:
/// - division par un zéro exact => DivisionParZero
/// - factorielle : entier de 0 à 170 seulement
/// - exactement une valeur doit rester en fin de parcours
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalc> {
    let mut pile: Vec<f64> = Vec::new();

    for tok in rpn.iter().copied() {
        match tok {
            Tok::Num(v) => pile.push(v),

            Tok::Plus | Tok::Moins | Tok::Fois | Tok::Division | Tok::Puissance => {
                let b = pile.pop().ok_or(ErreurCalc::OperandesManquantes)?;
                let a = pile.pop().ok_or(ErreurCalc::OperandesManquantes)?;

                let r = match tok {
                    Tok::Plus => a + b,
                    Tok::Moins => a - b,
                    Tok::Fois => a * b,
                    Tok::Division => {
                        if b == 0.0 {
                            return Err(ErreurCalc::DivisionParZero);
                        }
                        a / b
                    }
                    Tok::Puissance => a.powf(b),
                    _ => unreachable!(),
                };

                pile.push(r);
            }

            Tok::Factorielle => {
                let n = pile.pop().ok_or(ErreurCalc::OperandesManquantes)?;
                if n < 0.0 || n.fract() != 0.0 || n > FACTORIELLE_MAX {
                    return Err(ErreurCalc::FactorielleInvalide);
                }

                // produit itératif 2..=n (0! = 1! = 1)
                let mut acc = 1.0_f64;
                let mut k = 2.0_f64;
                while k <= n {
                    acc *= k;
                    k += 1.0;
                }
                pile.push(acc);
            }

            Tok::Fonction(f) => {
                let x = pile.pop().ok_or(ErreurCalc::OperandesManquantes)?;
                pile.push(f.appliquer(x));
            }

            Tok::ParG | Tok::ParD => return Err(ErreurCalc::ExpressionMalFormee),
        }
    }

    if pile.len() != 1 {
        return Err(ErreurCalc::ExpressionMalFormee);
    }
    Ok(pile.pop().unwrap_or_default())
}
