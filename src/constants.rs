/// The "about" key holds the package description used in the modulefile
/// help text.
pub const ABOUT: &str = "about";

/// The "builddirroot" key overrides the root under which build directories
/// are created.
pub const BUILDDIRROOT: &str = "builddirroot";

/// The "buildstaticlibs" key requests static instead of shared libraries.
pub const BUILDSTATICLIBS: &str = "buildstaticlibs";

/// The "buildsystem" key selects the build system (cmake or autotools).
pub const BUILDSYSTEM: &str = "buildsystem";

/// The "cmakebuilddebug" key selects a Debug default build type.
pub const CMAKEBUILDDEBUG: &str = "cmakebuilddebug";

/// The "cmakebuildtype" key sets CMAKE_BUILD_TYPE explicitly.
pub const CMAKEBUILDTYPE: &str = "cmakebuildtype";

/// The "cmakename" key overrides the cmake executable name.
pub const CMAKENAME: &str = "cmakename";

/// The "cmakesource" key names a subdirectory of the source tree holding
/// the top-level CMakeLists.txt.
pub const CMAKESOURCE: &str = "cmakesource";

/// The "cmakeuseninja" key selects the Ninja generator.
pub const CMAKEUSENINJA: &str = "cmakeuseninja";

/// The "compiler" key identifies the compiler family (gcc, intel, ...).
pub const COMPILER: &str = "compiler";

/// The "compilerversion" key identifies the compiler family version.
pub const COMPILERVERSION: &str = "compilerversion";

/// The default configuration file name.
pub const CONFIG_FILE: &str = "Configuration";

/// The "cppstandard" key adds a -std=c++NN compile flag.
pub const CPPSTANDARD: &str = "cppstandard";

/// The default build system when none is configured.
pub const DEFAULT_BUILD_SYSTEM: &str = "cmake";

/// The default build mode when none is configured.
pub const DEFAULT_MODE: &str = "seq";

/// The "dependson" key lists modules declared with depends_on().
pub const DEPENDSON: &str = "dependson";

/// The "dependsoncurrent" key declares a dependency on the currently
/// loaded version of another module.
pub const DEPENDSONCURRENT: &str = "dependsoncurrent";

/// The "downloadpath" key overrides the directory that downloads land in.
pub const DOWNLOADPATH: &str = "downloadpath";

/// The "downloadurl" key holds the archive URL for the download action.
pub const DOWNLOADURL: &str = "downloadurl";

/// Environment variables recognized as built-in configuration defaults.
/// Each set, non-empty variable seeds the lowercased configuration key.
pub const ENVIRONMENT_OPTIONS: &[&str] = &[
    "SYSTEM",
    "PACKAGEROOT",
    "INSTALLROOT",
    "MODULEROOT",
    "COMPILER",
    "COMPILERVERSION",
    "MPI",
    "MPIVERSION",
    "HOMEDIR",
    "SRCPATH",
    "INSTALLPATH",
    "BUILDDIRROOT",
    "MODULEDIR",
    "INSTALLEXT",
    "MODULEVERSIONEXTRA",
];

/// The environment variable prefix used in generated modulefiles,
/// e.g. LMOD_FFTW_DIR.
pub const ENV_VAR_PREFIX: &str = "LMOD";

/// The "extrabuildtargets" key lists additional make targets to build.
pub const EXTRABUILDTARGETS: &str = "extrabuildtargets";

/// The "extrainstalltargets" key lists additional make install targets.
pub const EXTRAINSTALLTARGETS: &str = "extrainstalltargets";

/// The "family" key declares the Lmod family of the module.
pub const FAMILY: &str = "family";

/// The version value that expands to a date-stamped git version.
pub const GIT_VERSION: &str = "git";

/// The "hasbin" key declares that the installation provides a bin directory.
pub const HASBIN: &str = "hasbin";

/// The "homedir" key sets the package home directory explicitly when no
/// package root is configured.
pub const HOMEDIR: &str = "homedir";

/// The "installext" key appends an extra component to the install extension.
pub const INSTALLEXT: &str = "installext";

/// The "installpath" key overrides the install prefix directory entirely.
pub const INSTALLPATH: &str = "installpath";

/// The "installroot" key sets the root under which installations land.
pub const INSTALLROOT: &str = "installroot";

/// The "installvariant" key disambiguates side-by-side variant builds.
pub const INSTALLVARIANT: &str = "installvariant";

/// The "jcount" key sets the parallel make job count.
pub const JCOUNT: &str = "jcount";

/// The "makebuildtarget" key names the primary make target.
pub const MAKEBUILDTARGET: &str = "makebuildtarget";

/// The "mode" key selects the build mode: core, seq, omp, mpi or hybrid.
pub const MODE: &str = "mode";

/// The "moduledir" key overrides the modulefile directory entirely.
pub const MODULEDIR: &str = "moduledir";

/// The "modulename" key overrides the module name (defaults to the package).
pub const MODULENAME: &str = "modulename";

/// The "modulenamealt" key sets an alternate module name whose variables
/// are also exported by the modulefile.
pub const MODULENAMEALT: &str = "modulenamealt";

/// The "modulenotes" key adds free-form notes to the modulefile help text.
pub const MODULENOTES: &str = "modulenotes";

/// The "moduleroot" key sets the root of the modulefile tree.
pub const MODULEROOT: &str = "moduleroot";

/// The "modules" key lists prerequisite modules checked by the test action.
pub const MODULES: &str = "modules";

/// The "moduleversionextra" key appends a suffix to the module version.
pub const MODULEVERSIONEXTRA: &str = "moduleversionextra";

/// The "mpi" key identifies the MPI family (impi, mvapich2, ...).
pub const MPI: &str = "mpi";

/// The "mpiversion" key identifies the MPI family version.
pub const MPIVERSION: &str = "mpiversion";

/// The "noinc" key declares that the installation has no include directory.
pub const NOINC: &str = "noinc";

/// The "noinstall" key skips the make install step.
pub const NOINSTALL: &str = "noinstall";

/// The "nolib" key declares that the installation has no lib directory.
pub const NOLIB: &str = "nolib";

/// The "package" key names the package being built.
pub const PACKAGE: &str = "package";

/// The "packageroot" key sets the root under which package home
/// directories are created.
pub const PACKAGEROOT: &str = "packageroot";

/// The "packageversion" key sets the package version; the value "git"
/// expands to a date-stamped git version.
pub const PACKAGEVERSION: &str = "packageversion";

/// The program name.
pub const PACKMOD: &str = "packmod";

/// The "pkgconfig" key names a pkg-config path relative to the prefix.
pub const PKGCONFIG: &str = "pkgconfig";

/// The "pkgconfiglib" key names a pkg-config path below the lib directory.
pub const PKGCONFIGLIB: &str = "pkgconfiglib";

/// The "prefixpathset" key requests a CMAKE_PREFIX_PATH entry for the prefix.
pub const PREFIXPATHSET: &str = "prefixpathset";

/// The "pythonpathabs" key prepends an absolute path to PYTHONPATH.
pub const PYTHONPATHABS: &str = "pythonpathabs";

/// The "pythonpathrel" key prepends a prefix-relative path to PYTHONPATH.
pub const PYTHONPATHREL: &str = "pythonpathrel";

/// The basename prefix of optional per-system/per-compiler rc files
/// consulted from the home directory before the main configuration file.
pub const RC_PREFIX: &str = ".packmodrc";

/// The "softwareurl" key links the upstream software page in the help text.
pub const SOFTWAREURL: &str = "softwareurl";

/// The "srcpath" key overrides the source directory entirely.
pub const SRCPATH: &str = "srcpath";

/// The "system" key identifies the cluster the build runs on.
pub const SYSTEM: &str = "system";

/// The "url" key links the package homepage in the help text.
pub const URL: &str = "url";
