// src/noyau/format.rs
//
// Affichage du résultat (côté calculatrice) :
// - entiers sans décimales
// - très grand / très petit : notation exponentielle (6 chiffres)
// - sinon 2 à 8 décimales, zéros finaux retirés

/// Seuil haut : au-delà, passage en notation exponentielle.
const SEUIL_EXP_HAUT: f64 = 1e9;

/// Seuil bas : en-deçà (hors zéro), passage en notation exponentielle.
const SEUIL_EXP_BAS: f64 = 1e-6;

/// Magnitude max pour l'affichage entier direct (au-delà, perte de sens).
const ENTIER_MAX: f64 = 1e15;

pub fn format_nombre(x: f64) -> String {
    if !x.is_finite() {
        // les appelants vérifient avant; filet de sécurité seulement
        return "Erreur".to_string();
    }

    let absx = x.abs();

    // Entier : affichage direct, sans décimales
    if (x % 1.0).abs() < f64::EPSILON && absx < ENTIER_MAX {
        return format!("{}", x as i64);
    }

    // Très grand / très petit : exponentiel 6 chiffres
    if absx >= SEUIL_EXP_HAUT || (absx > 0.0 && absx <= SEUIL_EXP_BAS) {
        return format!("{x:.6e}");
    }

    // 2..=8 décimales selon la magnitude, zéros finaux retirés
    let decimales: usize = if absx >= 1.0 {
        let magnitude = absx.log10().floor() as i64;
        (8 - magnitude).clamp(2, 8) as usize
    } else {
        8
    };

    let s = format!("{x:.decimales$}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
