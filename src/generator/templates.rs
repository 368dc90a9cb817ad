//! Fixed C text surrounding the generated table

/// Copyright banner carried by every generated Chromium source file
pub const COPYRIGHT: &str = "\
/* Copyright (c) 2001, Stanford University
 * All rights reserved.
 *
 * See the file LICENSE.txt for information on redistributing this software.
 */
";

/// Generated-file marker, includes and the opening of the `functions[]` array
pub const PROLOGUE: &str = "
/* DO NOT EDIT - THIS FILE GENERATED BY glproc-gen */

#include \"chromium.h\"
#include \"cr_string.h\"
#include \"cr_version.h\"
#include \"stub.h\"


struct name_address {
  const char *name;
  CR_PROC address;
};

static struct name_address functions[] = {
";

pub const GLUE_COMMENT: &str = "\t/* Chromium binding/glue functions */\n";

/// Sentinel entry and end of the array
pub const TABLE_END: &str = "
\t{ NULL, NULL }
};

";

/// GLX extension entry points the resolver answers without a table entry
///
/// Each pair is the exported name and its forward declaration. Order is the
/// order of the fallback checks in the resolver.
pub const GLX_EXTENSIONS: &[(&str, &str)] = &[
    (
        "glXBindTexImageEXT",
        "DECLEXPORT(void) glXBindTexImageEXT(Display *dpy, GLXDrawable draw, int buffer, const int *attrib_list);",
    ),
    (
        "glXReleaseTexImageEXT",
        "DECLEXPORT(void) glXReleaseTexImageEXT(Display *dpy, GLXDrawable draw, int buffer);",
    ),
    (
        "glXQueryDrawable",
        "DECLEXPORT(void) glXQueryDrawable(Display *dpy, GLXDrawable draw, int attribute, unsigned int *value);",
    ),
    (
        "glXGetFBConfigs",
        "DECLEXPORT(GLXFBConfig *) glXGetFBConfigs(Display *dpy, int screen, int *nelements);",
    ),
    (
        "glXGetFBConfigAttrib",
        "DECLEXPORT(int) glXGetFBConfigAttrib(Display *dpy, GLXFBConfig config, int attribute, int *value);",
    ),
    (
        "glXCreatePixmap",
        "DECLEXPORT(GLXPixmap) glXCreatePixmap(Display *dpy, GLXFBConfig config, Pixmap pixmap, const int *attrib_list);",
    ),
];

/// Resolver head: init, then first-match linear scan of `functions[]`
pub const RESOLVER_HEAD: &str = "

CR_PROC CR_APIENTRY crGetProcAddress( const char *name )
{
\tint i;
\tstubInit();

\tfor (i = 0; functions[i].name; i++) {
\t\tif (crStrcmp(name, functions[i].name) == 0) {
\t\t\treturn functions[i].address;
\t\t}
\t}

";

/// WGL extension pointers, only meaningful on Windows builds
///
/// Not part of the default output; see `GeneratorConfig::emit_wgl_stubs`.
pub const WGL_STUBS: &str = "
/* As these are Windows specific (i.e. wgl), define these now.... */
#ifdef WINDOWS
\t{
\t\twglGetExtensionsStringEXTFunc_t wglGetExtensionsStringEXT = NULL;
\t\twglChoosePixelFormatFunc_t wglChoosePixelFormatEXT = NULL;
\t\twglGetPixelFormatAttribivEXTFunc_t wglGetPixelFormatAttribivEXT = NULL;
\t\twglGetPixelFormatAttribfvEXTFunc_t wglGetPixelFormatAttribfvEXT = NULL;
\t\tif (!crStrcmp( name, \"wglGetExtensionsStringEXT\" )) return (CR_PROC) wglGetExtensionsStringEXT;
\t\tif (!crStrcmp( name, \"wglChoosePixelFormatEXT\" )) return (CR_PROC) wglChoosePixelFormatEXT;
\t\tif (!crStrcmp( name, \"wglGetPixelFormatAttribivEXT\" )) return (CR_PROC) wglGetPixelFormatAttribivEXT;
\t\tif (!crStrcmp( name, \"wglGetPixelFormatAttribfvEXT\" )) return (CR_PROC) wglGetPixelFormatAttribfvEXT;
\t}
#endif
";

/// Diagnostic for an unresolved, non-NULL name; then NULL
pub const RESOLVER_TAIL: &str = "
    if (name) crDebug(\"Returning NULL for %s\", name);
\treturn NULL;
}

";

/// Message the generated resolver logs for a miss
pub fn unresolved_diagnostic(name: &str) -> String {
    format!("Returning NULL for {name}")
}
