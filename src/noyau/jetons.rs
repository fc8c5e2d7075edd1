// src/noyau/jetons.rs

use std::fmt;

use super::erreurs::ErreurCalc;

/// Fonctions scientifiques supportées (arité 1, résolues dès la tokenisation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FnSci {
    Sin,
    Cos,
    Tan,
    Log, // base 10
    Ln,  // naturel
    Sqrt,
}

impl FnSci {
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        match nom {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "log" => Some(Self::Log),
            "ln" => Some(Self::Ln),
            "sqrt" => Some(Self::Sqrt),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
        }
    }

    /// Application flottante (angles en radians, log en base 10, ln naturel).
    pub fn appliquer(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Log => x.log10(),
            Self::Ln => x.ln(),
            Self::Sqrt => x.sqrt(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    /// Toujours fini à la tokenisation (constantes substituées immédiatement).
    Num(f64),

    Plus,
    Moins,
    Fois,
    Division,
    Puissance, // ^

    Fonction(FnSci),
    Factorielle, // '!' postfixé

    ParG,
    ParD,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(v) => write!(f, "{v}"),
            Tok::Plus => write!(f, "+"),
            Tok::Moins => write!(f, "-"),
            Tok::Fois => write!(f, "*"),
            Tok::Division => write!(f, "/"),
            Tok::Puissance => write!(f, "^"),
            Tok::Fonction(fn_sci) => write!(f, "{}", fn_sci.nom()),
            Tok::Factorielle => write!(f, "!"),
            Tok::ParG => write!(f, "("),
            Tok::ParD => write!(f, ")"),
        }
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5) — un seul point par littéral
/// - opérateurs + - * / ^ et '!' postfixé
/// - parenthèses ( )
/// - π / pi et e (constantes, substituées en Num)
/// - fonctions sin cos tan log ln sqrt, obligatoirement suivies de '('
///
/// Tout autre caractère => CaractereInattendu.
/// Un identifiant isolé (hors pi/e) => FonctionInconnue, sans tentative
/// de rattrapage.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::ParG);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::ParD);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Moins);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Fois);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Division);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Tok::Puissance);
                i += 1;
                continue;
            }
            '!' => {
                out.push(Tok::Factorielle);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Constante π (symbole unicode)
        if c == 'π' {
            out.push(Tok::Num(std::f64::consts::PI));
            i += 1;
            continue;
        }

        // Nombre décimal : chiffres + au plus un point
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut points = 0usize;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                if chars[i] == '.' {
                    points += 1;
                }
                i += 1;
            }
            let lit: String = chars[start..i].iter().collect();
            if points > 1 {
                return Err(ErreurCalc::NombreMalForme(lit));
            }
            let v: f64 = lit
                .parse()
                .map_err(|_| ErreurCalc::NombreMalForme(lit.clone()))?;
            out.push(Tok::Num(v));
            continue;
        }

        // Identifiants ASCII : fonction si suivi de '(', sinon constante mot
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect();

            // '(' immédiat => appel de fonction ('(' non consommée)
            if i < chars.len() && chars[i] == '(' {
                match FnSci::depuis_nom(&mot) {
                    Some(f) => out.push(Tok::Fonction(f)),
                    None => return Err(ErreurCalc::FonctionInconnue(mot)),
                }
                continue;
            }

            // Constantes en toutes lettres
            match mot.as_str() {
                "pi" => out.push(Tok::Num(std::f64::consts::PI)),
                "e" => out.push(Tok::Num(std::f64::consts::E)),
                // Identifiant isolé : rejet explicite (pas de backtracking)
                _ => return Err(ErreurCalc::FonctionInconnue(mot)),
            }
            continue;
        }

        return Err(ErreurCalc::CaractereInattendu(c));
    }

    Ok(out)
}

/// Format utilitaire (panneau "démarche") : liste de jetons en texte.
pub fn format_jetons(jetons: &[Tok]) -> String {
    let mut out = Vec::with_capacity(jetons.len());
    for t in jetons {
        out.push(t.to_string());
    }
    out.join(" ")
}
