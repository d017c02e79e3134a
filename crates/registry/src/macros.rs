//! Declaration macros targeted by the schema generator.

/// Declares an enumeration and registers its descriptor at startup.
///
/// The Rust variants carry the wire strings; an extra `Opaque` variant holds
/// member strings this build does not know, so newer peers' values round-trip
/// unchanged. Optional `since "x.y.z.w"` clauses gate the whole enumeration
/// (after the name) or a single member (after its wire string).
///
/// The variant name `Opaque` is reserved. A member whose wire string is
/// `"opaque"` must take another Rust name (the generator emits
/// `OpaqueMember`); declaring a variant called `Opaque` fails to compile with
/// a duplicate-variant error.
///
/// ```rust,ignore
/// vim_enum! {
///     /// Storage protocol of a device.
///     pub enum DeviceProtocol since "8.0.1.0" {
///         Nvme = "NVMe",
///         Scsi = "SCSI",
///     }
/// }
/// ```
#[macro_export]
macro_rules! vim_enum {
	(
		$(#[$($attr:tt)*])*
		$vis:vis enum $name:ident $(since $since:literal)? {
			$(
				$(#[$($vattr:tt)*])*
				$variant:ident = $wire:literal $(since $vsince:literal)?
			),+ $(,)?
		}
	) => {
		$(#[$($attr)*])*
		#[derive(Debug, Clone)]
		$vis enum $name {
			$(
				$(#[$($vattr)*])*
				$variant,
			)+
			/// A member string this build does not know, carried through verbatim.
			Opaque(Box<str>),
		}

		impl $name {
			/// Wire string of this value.
			pub fn as_str(&self) -> &str {
				match self {
					$( Self::$variant => $wire, )+
					Self::Opaque(raw) => &**raw,
				}
			}
		}

		impl $crate::VimEnum for $name {
			const ID: &'static str = stringify!($name);
			const MEMBERS: &'static [&'static str] = &[$($wire),+];

			fn descriptor() -> &'static $crate::EnumDescriptor {
				$crate::__private::paste! { &[<__ $name _DESCRIPTOR>] }
			}

			fn as_str(&self) -> &str {
				$name::as_str(self)
			}

			fn from_known(raw: &str) -> Option<Self> {
				match raw {
					$( $wire => Some(Self::$variant), )+
					_ => None,
				}
			}

			fn unknown(raw: Box<str>) -> Self {
				Self::Opaque(raw)
			}
		}

		$crate::__private::paste! {
			#[doc(hidden)]
			#[allow(non_upper_case_globals)]
			static [<__ $name _DESCRIPTOR>]: $crate::EnumDescriptor = $crate::EnumDescriptor::new(
				stringify!($name),
				<$name as $crate::VimEnum>::MEMBERS,
				$crate::Origin::new(module_path!(), $crate::__first_doc!($(#[$($attr)*])*)),
			)
			$( .since($since) )?
			.member_gates(&[ $( $( ($wire, $vsince), )? )+ ]);

			$crate::__private::inventory::submit! {
				$crate::TypeReg($crate::TypeDescriptor::Enum(&[<__ $name _DESCRIPTOR>]))
			}
		}

		impl PartialEq for $name {
			fn eq(&self, other: &Self) -> bool {
				self.as_str() == other.as_str()
			}
		}

		impl Eq for $name {}

		impl ::core::hash::Hash for $name {
			fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
				::core::hash::Hash::hash(self.as_str(), state)
			}
		}

		impl ::core::fmt::Display for $name {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				self.as_str()
			}
		}

		impl ::core::str::FromStr for $name {
			type Err = $crate::RegistryError;

			fn from_str(raw: &str) -> Result<Self, Self::Err> {
				<Self as $crate::VimEnum>::parse_strict(raw)
			}
		}

		impl $crate::__private::serde::Serialize for $name {
			fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
			where
				S: $crate::__private::serde::Serializer,
			{
				serializer.serialize_str(self.as_str())
			}
		}

		impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
			fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
			where
				D: $crate::__private::serde::Deserializer<'de>,
			{
				let raw = <String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
				Ok(<Self as $crate::VimEnum>::parse_permissive(&raw))
			}
		}
	};
}

/// Declares managed-object types and registers their descriptors at startup.
///
/// ```rust,ignore
/// managed_object! {
///     ManagedEntity;
///     ComputeResource: ManagedEntity;
///     ClusterComputeResource: ComputeResource;
/// }
/// ```
#[macro_export]
macro_rules! managed_object {
	($(
		$(#[$($attr:tt)*])*
		$name:ident $(: $base:ident)? $(since $since:literal)?;
	)+) => {
		$crate::__private::paste! {
			$(
				$(#[$($attr)*])*
				#[allow(non_upper_case_globals)]
				static [<__ $name _OBJECT>]: $crate::ObjectDescriptor = $crate::ObjectDescriptor::new(
					stringify!($name),
					$crate::Origin::new(module_path!(), $crate::__first_doc!($(#[$($attr)*])*)),
				)
				$( .extends(stringify!($base)) )?
				$( .since($since) )?;

				$crate::__private::inventory::submit! {
					$crate::TypeReg($crate::TypeDescriptor::Object(&[<__ $name _OBJECT>]))
				}
			)+
		}
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __first_doc {
	() => {
		""
	};
	(#[doc = $doc:literal] $($rest:tt)*) => {
		$doc
	};
	(#[$($other:tt)*] $($rest:tt)*) => {
		$crate::__first_doc!($($rest)*)
	};
}
