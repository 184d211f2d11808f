use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TarotCard {
    pub name: &'static str,
    pub number: u8,
    pub meaning: &'static str,
}

/// The 22 major arcana, indexed by card number.
pub static MAJOR_ARCANA: [TarotCard; 22] = [
    TarotCard { name: "El Loco", number: 0, meaning: "Nuevos comienzos, aventura, libertad" },
    TarotCard { name: "El Mago", number: 1, meaning: "Manifestación, poder personal, acción" },
    TarotCard { name: "La Sacerdotisa", number: 2, meaning: "Intuición, misterio, sabiduría interior" },
    TarotCard { name: "La Emperatriz", number: 3, meaning: "Abundancia, fertilidad, amor maternal" },
    TarotCard { name: "El Emperador", number: 4, meaning: "Estructura, autoridad, estabilidad" },
    TarotCard { name: "El Hierofante", number: 5, meaning: "Tradición, guía espiritual, enseñanza" },
    TarotCard { name: "Los Enamorados", number: 6, meaning: "Amor, decisiones del corazón, unión" },
    TarotCard { name: "El Carro", number: 7, meaning: "Victoria, determinación, avance" },
    TarotCard { name: "La Fuerza", number: 8, meaning: "Coraje interior, paciencia, dominio" },
    TarotCard { name: "El Ermitaño", number: 9, meaning: "Introspección, soledad, búsqueda interior" },
    TarotCard { name: "La Rueda de la Fortuna", number: 10, meaning: "Cambios, ciclos, destino" },
    TarotCard { name: "La Justicia", number: 11, meaning: "Equilibrio, verdad, consecuencias" },
    TarotCard { name: "El Colgado", number: 12, meaning: "Sacrificio, nueva perspectiva, soltar" },
    TarotCard { name: "La Muerte", number: 13, meaning: "Transformación, fin de un ciclo, renacimiento" },
    TarotCard { name: "La Templanza", number: 14, meaning: "Equilibrio, paciencia, armonía" },
    TarotCard { name: "El Diablo", number: 15, meaning: "Tentación, ataduras, sombras" },
    TarotCard { name: "La Torre", number: 16, meaning: "Cambio repentino, revelación, destrucción" },
    TarotCard { name: "La Estrella", number: 17, meaning: "Esperanza, inspiración, renovación" },
    TarotCard { name: "La Luna", number: 18, meaning: "Ilusiones, intuición, lo oculto" },
    TarotCard { name: "El Sol", number: 19, meaning: "Éxito, alegría, vitalidad" },
    TarotCard { name: "El Juicio", number: 20, meaning: "Despertar, renacimiento, llamado" },
    TarotCard { name: "El Mundo", number: 21, meaning: "Completitud, logro, plenitud" },
];

pub fn card(number: u8) -> Option<&'static TarotCard> {
    MAJOR_ARCANA.get(number as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_is_indexed_by_number() {
        for (i, c) in MAJOR_ARCANA.iter().enumerate() {
            assert_eq!(c.number as usize, i);
        }
        assert_eq!(card(13).map(|c| c.name), Some("La Muerte"));
        assert!(card(22).is_none());
    }
}
