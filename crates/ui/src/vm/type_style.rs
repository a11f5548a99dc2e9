//! Per-category colours and icons used by tiles and filter chips.

/// Colour for categories without an entry in the palette.
pub const UNKNOWN_TYPE_COLOR: &str = "#ddd";

#[must_use]
pub fn type_color(tag: &str) -> Option<&'static str> {
    let color = match tag {
        "fire" => "#ffb07b",
        "water" => "#9cc7ff",
        "grass" => "#bff2a6",
        "electric" => "#ffe08a",
        "ice" => "#cff6ff",
        "fighting" => "#f0b6a6",
        "poison" => "#d6a5f5",
        "ground" => "#e8d5b0",
        "flying" => "#d8d8ff",
        "psychic" => "#ffb2db",
        "bug" => "#d7ef9a",
        "rock" => "#d9c89d",
        "ghost" => "#c8baf1",
        "dragon" => "#c6b8ff",
        "dark" => "#cfcfcf",
        "steel" => "#dce3ea",
        "fairy" => "#ffd7ea",
        "normal" => "#ececec",
        _ => return None,
    };
    Some(color)
}

/// CSS background for a name bar: one colour, or a hard 50/50 split for dual types.
#[must_use]
pub fn type_background<S: AsRef<str>>(tags: &[S]) -> String {
    let color_of = |tag: &S| type_color(tag.as_ref()).unwrap_or(UNKNOWN_TYPE_COLOR);
    match tags {
        [] => UNKNOWN_TYPE_COLOR.to_string(),
        [only] => color_of(only).to_string(),
        [first, second, ..] => {
            let (a, b) = (color_of(first), color_of(second));
            format!("linear-gradient(90deg, {a} 0%, {a} 50%, {b} 50%, {b} 100%)")
        }
    }
}

/// Square SVG icon for a category, if one is known.
#[must_use]
pub fn type_icon_url(tag: &str) -> Option<&'static str> {
    let url = match tag {
        "steel" => "https://images.wikidexcdn.net/mwuploads/wikidex/6/6c/latest/20230128124521/Tipo_acero_icono_EP.svg",
        "water" => "https://images.wikidexcdn.net/mwuploads/wikidex/d/d6/latest/20230128124702/Tipo_agua_icono_EP.svg",
        "bug" => "https://images.wikidexcdn.net/mwuploads/wikidex/1/1a/latest/20230128124809/Tipo_bicho_icono_EP.svg",
        "dragon" => "https://images.wikidexcdn.net/mwuploads/wikidex/1/15/latest/20230128124905/Tipo_dragón_icono_EP.svg",
        "electric" => "https://images.wikidexcdn.net/mwuploads/wikidex/8/84/latest/20230128125008/Tipo_eléctrico_icono_EP.svg",
        "ghost" => "https://images.wikidexcdn.net/mwuploads/wikidex/3/3d/latest/20230128125103/Tipo_fantasma_icono_EP.svg",
        "fire" => "https://images.wikidexcdn.net/mwuploads/wikidex/5/55/latest/20230128125153/Tipo_fuego_icono_EP.svg",
        "fairy" => "https://images.wikidexcdn.net/mwuploads/wikidex/b/b7/latest/20230128125233/Tipo_hada_icono_EP.svg",
        "ice" => "https://images.wikidexcdn.net/mwuploads/wikidex/a/a6/latest/20230128125423/Tipo_hielo_icono_EP.svg",
        "fighting" => "https://images.wikidexcdn.net/mwuploads/wikidex/f/f2/latest/20230128125518/Tipo_lucha_icono_EP.svg",
        "normal" => "https://images.wikidexcdn.net/mwuploads/wikidex/c/c3/latest/20230128125621/Tipo_normal_icono_EP.svg",
        "grass" => "https://images.wikidexcdn.net/mwuploads/wikidex/e/ed/latest/20230128125654/Tipo_planta_icono_EP.svg",
        "psychic" => "https://images.wikidexcdn.net/mwuploads/wikidex/2/22/latest/20230128125735/Tipo_psíquico_icono_EP.svg",
        "rock" => "https://images.wikidexcdn.net/mwuploads/wikidex/1/14/latest/20230128125805/Tipo_roca_icono_EP.svg",
        "dark" => "https://images.wikidexcdn.net/mwuploads/wikidex/e/e0/latest/20230128132504/Tipo_siniestro_icono_EP.svg",
        "ground" => "https://images.wikidexcdn.net/mwuploads/wikidex/c/c8/latest/20230128132625/Tipo_tierra_icono_EP.svg",
        "poison" => "https://images.wikidexcdn.net/mwuploads/wikidex/f/fa/latest/20230128132735/Tipo_veneno_icono_EP.svg",
        "flying" => "https://images.wikidexcdn.net/mwuploads/wikidex/6/6b/latest/20230128132815/Tipo_volador_icono_EP.svg",
        _ => return None,
    };
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_type_is_a_flat_colour() {
        assert_eq!(type_background(&["fire"]), "#ffb07b");
    }

    #[test]
    fn dual_type_is_split_in_half() {
        assert_eq!(
            type_background(&["grass", "poison"]),
            "linear-gradient(90deg, #bff2a6 0%, #bff2a6 50%, #d6a5f5 50%, #d6a5f5 100%)"
        );
    }

    #[test]
    fn unknown_types_fall_back_to_grey() {
        assert_eq!(type_background(&["stellar"]), UNKNOWN_TYPE_COLOR);
        let empty: [&str; 0] = [];
        assert_eq!(type_background(&empty), UNKNOWN_TYPE_COLOR);
    }

    #[test]
    fn every_coloured_type_has_an_icon() {
        for tag in [
            "fire", "water", "grass", "electric", "ice", "fighting", "poison", "ground",
            "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
            "normal",
        ] {
            assert!(type_color(tag).is_some(), "{tag}");
            assert!(type_icon_url(tag).is_some(), "{tag}");
        }
        assert!(type_icon_url("shadow").is_none());
    }
}
