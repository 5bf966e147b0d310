//! Closed enumerations for fields QuickBooks documents as fixed value sets.
//!
//! Each enum serializes to the exact vendor string and parses with
//! [`FromStr`](std::str::FromStr), rejecting anything outside the set with
//! [`QuickbooksError::InvalidValue`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuickbooksError;

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// All variants, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The vendor wire string.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant), )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = QuickbooksError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| QuickbooksError::InvalidValue {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

closed_enum! {
    /// How a purchase was paid.
    PaymentType as "payment type" {
        Cash,
        Check,
        CreditCard,
    }
}

closed_enum! {
    /// Print state of a transaction.
    PrintStatus as "print status" {
        NotSet,
        NeedToPrint,
        PrintComplete,
    }
}

closed_enum! {
    /// Email delivery state of a transaction.
    EmailStatus as "email status" {
        NotSet,
        NeedToSend,
        EmailSent,
    }
}

closed_enum! {
    /// Whether line amounts include tax.
    GlobalTaxCalculation as "global tax calculation" {
        TaxExcluded,
        TaxInclusive,
        NotApplicable,
    }
}

closed_enum! {
    /// Discriminates which detail object a [`Line`](super::Line) carries.
    LineDetailType as "line detail type" {
        SalesItemLineDetail,
        GroupLineDetail,
        DescriptionOnly,
        DiscountLineDetail,
        SubTotalLineDetail,
        AccountBasedExpenseLineDetail,
        ItemBasedExpenseLineDetail,
        TaxLineDetail,
    }
}

closed_enum! {
    /// Billable state of an expense line.
    BillableStatus as "billable status" {
        Billable,
        NotBillable,
        HasBeenBilled,
    }
}
