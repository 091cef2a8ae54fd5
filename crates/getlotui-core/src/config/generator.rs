//! Starter files written by `init`: theme tokens and the style-merging helper

use crate::detect::Adapter;

/// A file to generate, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub relative_path: String,
    pub contents: &'static str,
}

/// Core packages the web utility file imports
pub const WEB_CORE_PACKAGES: &[&str] = &["clsx", "tailwind-merge", "class-variance-authority"];

const THEME_TS: &str = r##"export const theme = {
  colors: {
    primary: "#6366f1",
    primaryForeground: "#ffffff",
    secondary: "#f1f5f9",
    secondaryForeground: "#0f172a",
    background: "#ffffff",
    foreground: "#0f172a",
    muted: "#f1f5f9",
    mutedForeground: "#64748b",
    border: "#e2e8f0",
    destructive: "#ef4444",
  },
  radius: {
    sm: 4,
    md: 8,
    lg: 12,
    full: 9999,
  },
  spacing: {
    xs: 4,
    sm: 8,
    md: 16,
    lg: 24,
    xl: 32,
  },
} as const;

export type Theme = typeof theme;
"##;

const THEME_DART: &str = r#"import 'package:flutter/material.dart';

class GetlotTheme {
  GetlotTheme._();

  static const Color primary = Color(0xFF6366F1);
  static const Color primaryForeground = Color(0xFFFFFFFF);
  static const Color secondary = Color(0xFFF1F5F9);
  static const Color secondaryForeground = Color(0xFF0F172A);
  static const Color background = Color(0xFFFFFFFF);
  static const Color foreground = Color(0xFF0F172A);
  static const Color muted = Color(0xFFF1F5F9);
  static const Color mutedForeground = Color(0xFF64748B);
  static const Color border = Color(0xFFE2E8F0);
  static const Color destructive = Color(0xFFEF4444);

  static const double radiusSm = 4;
  static const double radiusMd = 8;
  static const double radiusLg = 12;

  static const double spacingXs = 4;
  static const double spacingSm = 8;
  static const double spacingMd = 16;
  static const double spacingLg = 24;
  static const double spacingXl = 32;
}
"#;

const UTILS_WEB: &str = r#"import { type ClassValue, clsx } from "clsx";
import { twMerge } from "tailwind-merge";

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs));
}
"#;

const UTILS_EXPO: &str = r#"import { StyleSheet, type StyleProp } from "react-native";

export function cn<T>(...styles: StyleProp<T>[]): T {
  return StyleSheet.flatten(styles) as T;
}
"#;

const UTILS_DART: &str = r#"import 'package:flutter/widgets.dart';

TextStyle mergeStyles(TextStyle? base, TextStyle? override) {
  if (base == null) return override ?? const TextStyle();
  return base.merge(override);
}

BoxDecoration mergeDecorations(BoxDecoration base, BoxDecoration? override) {
  if (override == null) return base;
  return base.copyWith(
    color: override.color,
    border: override.border,
    borderRadius: override.borderRadius,
    boxShadow: override.boxShadow,
  );
}
"#;

/// Theme token file for `adapter`, placed under `theme_dir`
pub fn theme_file(adapter: Adapter, theme_dir: &str) -> GeneratedFile {
    let (name, contents) = match adapter {
        Adapter::Flutter => ("config.dart", THEME_DART),
        _ => ("config.ts", THEME_TS),
    };
    GeneratedFile {
        relative_path: format!("{}/{}", theme_dir.trim_end_matches('/'), name),
        contents,
    }
}

/// Style-merging helper for `adapter`, if the adapter has one
pub fn utility_file(adapter: Adapter) -> Option<GeneratedFile> {
    let (relative_path, contents) = match adapter {
        Adapter::Web => ("lib/utils.ts", UTILS_WEB),
        Adapter::Expo => ("lib/utils.ts", UTILS_EXPO),
        Adapter::Flutter => ("lib/utils/style_utils.dart", UTILS_DART),
        Adapter::Unknown => return None,
    };
    Some(GeneratedFile {
        relative_path: relative_path.to_string(),
        contents,
    })
}
