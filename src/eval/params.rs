use super::value::Value;
use crate::chess::types::PieceType;

// Piece weights are in tenths of a pawn
pub const WEIGHT_SCALE: i32 = 10;

pub const NOISE_MASK: u64 = 14;
pub const NOISE_OFFSET: i32 = 14;

macro_rules! tunable_params {
    { $($name:ident: $type:ident = $value:expr, $min:expr, $max:expr;)* } => {
        #[allow(non_upper_case_globals)]
        mod tuned_params {
            $(
            #[cfg(not(feature = "tune"))]
            const _: () = {
                assert!($value >= $min, stringify!($name));
                assert!($value <= $max, stringify!($name));
                assert!($min < $max, stringify!($name));
            };

            #[cfg(not(feature = "tune"))]
            pub const $name: $type = $value;

            #[cfg(feature = "tune")]
            pub static mut $name: $type = $value;
            )*
        }

        // (min, max) of each param
        #[allow(non_upper_case_globals)]
        pub mod param_bounds {
            $(
            pub const $name: ($type, $type) = ($min, $max);
            )*
        }

        $(
        #[cfg(not(feature = "tune"))]
        #[inline]
        pub const fn $name() -> $type {
            tuned_params::$name
        }

        #[cfg(feature = "tune")]
        #[inline]
        pub fn $name() -> $type {
            unsafe { tuned_params::$name }
        }
        )*

        #[cfg(feature = "tune")]
        pub fn set_tunable_param(name: &str, new_value: &str) -> Result<(), String> {
            match name {
                $(
                stringify!($name) => {
                    let parsed: $type = new_value
                        .parse()
                        .map_err(|_| format!("Error parsing value '{new_value}' for {name}"))?;

                    if parsed < $min || parsed > $max {
                        return Err(format!("{name} must be in [{}, {}]", $min, $max));
                    }

                    unsafe { tuned_params::$name = parsed };
                    Ok(())
                },
                )*
                _ => Err(format!("Unknown option {name}")),
            }
        }

        #[cfg(feature = "tune")]
        #[allow(clippy::print_with_newline)]
        pub fn print_params_options() {
            $(
            print!("option name {} type string default {} min {} max {}\n",
                stringify!($name),
                $name(),
                $min,
                $max
            );
            )*
        }
    };
}

tunable_params! {
    pawn_weight: i32 = 10, 5, 20;
    knight_weight: i32 = 29, 20, 35;
    bishop_weight: i32 = 30, 20, 35;
    rook_weight: i32 = 50, 35, 55;
    queen_weight: i32 = 90, 70, 100;
    pawn_value_eg: i32 = 208, 100, 250;
}

// 9 queens, 2 rooks, 2 bishops and 2 knights against a bare king, every param at its max,
// must stay below the mate band
const _: () = {
    let most_material: i32 = 9 * param_bounds::queen_weight.1
        + 2 * param_bounds::rook_weight.1
        + 2 * param_bounds::bishop_weight.1
        + 2 * param_bounds::knight_weight.1;

    let worst_eval: i32 =
        most_material * param_bounds::pawn_value_eg.1 / WEIGHT_SCALE + NOISE_OFFSET;

    assert!(worst_eval < Value::MIN_MATE_SCORE.get());
};

#[cfg(not(feature = "tune"))]
pub const fn get_weight(pt: PieceType) -> i32 {
    match pt {
        PieceType::Pawn => pawn_weight(),
        PieceType::Knight => knight_weight(),
        PieceType::Bishop => bishop_weight(),
        PieceType::Rook => rook_weight(),
        PieceType::Queen => queen_weight(),
        PieceType::King => 0,
    }
}

#[cfg(feature = "tune")]
pub fn get_weight(pt: PieceType) -> i32 {
    match pt {
        PieceType::Pawn => pawn_weight(),
        PieceType::Knight => knight_weight(),
        PieceType::Bishop => bishop_weight(),
        PieceType::Rook => rook_weight(),
        PieceType::Queen => queen_weight(),
        PieceType::King => 0,
    }
}
